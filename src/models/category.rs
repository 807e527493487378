//! Category model
//!
//! A category is a user-defined label for classifying transactions. Names are
//! compared exactly (case-sensitive) and are never renamed once created.

use serde::Serialize;
use std::fmt;

use crate::validation::is_valid_category_name;

/// A transaction category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category, returning `None` if the name fails the format rule
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        is_valid_category_name(&name).then_some(Self(name))
    }

    /// Create a category from a name already known to be valid
    pub(crate) fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the category name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
