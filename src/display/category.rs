//! Category display formatting

use crate::models::Category;

/// Format categories in creation order, marking the default
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'expense category add <NAME>' to create one.\n"
            .to_string();
    }

    let mut output = String::new();
    for (i, category) in categories.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        output.push_str(&format!("  {}{}\n", category, marker));
    }
    output
}
