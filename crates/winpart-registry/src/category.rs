//! Category labels.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A display label grouping related partitioners.
///
/// Ordering between categories is not a property of the label; it is the
/// order in which a [`Registry`](crate::Registry) received them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

impl Category {
    /// Partitioners tied to a single hardware backend.
    pub const BACKEND_SPECIFIC: Category = Category::from_static("Backend-Specific");
    /// Generic partitioners that work with any backend.
    pub const CANONICAL: Category = Category::from_static("Canonical (Platform-Agnostic)");
    /// Demonstration partitioners.
    pub const EXAMPLE: Category = Category::from_static("Example/Demo");

    /// Create a category from a static label.
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    /// Create a category from any label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(Cow::Owned(label.into()))
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Category {
    fn from(label: &'static str) -> Self {
        Self::from_static(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_labels_compare_equal() {
        assert_eq!(Category::new("Backend-Specific"), Category::BACKEND_SPECIFIC);
        assert_eq!(Category::CANONICAL.label(), "Canonical (Platform-Agnostic)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Category::EXAMPLE).unwrap();
        assert_eq!(json, "\"Example/Demo\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::EXAMPLE);
    }
}
