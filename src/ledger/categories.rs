//! Category registry
//!
//! An ordered, deduplicated set of category names. Insertion order is kept:
//! the first category ever created is the default selection.

use std::collections::HashSet;

use crate::models::Category;
use crate::validation::Rejection;

/// Ordered set of categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    names: HashSet<String>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Append a category, rejecting exact duplicates
    pub fn add(&mut self, category: Category) -> Result<(), Rejection> {
        if !self.names.insert(category.as_str().to_string()) {
            return Err(Rejection::DuplicateCategory(category.as_str().to_string()));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Categories in creation order
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// The first category ever created, if any
    pub fn default(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Exact-match membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Look up a category by exact name
    pub fn get(&self, name: &str) -> Option<&Category> {
        if !self.contains(name) {
            return None;
        }
        self.categories.iter().find(|c| c.as_str() == name)
    }

    /// Position of a category in creation order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }
}

impl<'a> IntoIterator for &'a CategoryRegistry {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
