//! Partitioner descriptors and their flattened form.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One partitioner known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionerEntry {
    /// Unique human-readable identifier (e.g., "XnnpackPartitioner").
    pub name: String,
    /// Dotted path of the implementing module. Stored, never resolved.
    pub module: String,
    /// One-line summary.
    pub description: String,
    /// Related specialized partitioners, in display order. Empty when the
    /// partitioner has none.
    #[serde(default)]
    pub variants: Vec<String>,
}

impl PartitionerEntry {
    /// Create an entry without variants.
    pub fn new(
        name: impl Into<String>,
        module: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            description: description.into(),
            variants: Vec::new(),
        }
    }

    /// Attach variants, keeping the given order.
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    /// Variants joined for display, or `None` if there are none.
    pub fn variants_display(&self) -> Option<String> {
        if self.variants.is_empty() {
            None
        } else {
            Some(self.variants.join(", "))
        }
    }
}

/// A [`PartitionerEntry`] annotated with its owning category.
///
/// Only produced by [`flatten`](crate::flatten()); borrows from the registry
/// it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlatRecord<'a> {
    pub category: &'a Category,
    pub name: &'a str,
    pub module: &'a str,
    pub description: &'a str,
    pub variants: &'a [String],
}

impl<'a> FlatRecord<'a> {
    pub(crate) fn new(category: &'a Category, entry: &'a PartitionerEntry) -> Self {
        Self {
            category,
            name: &entry.name,
            module: &entry.module,
            description: &entry.description,
            variants: &entry.variants,
        }
    }
}
