//! The immutable category → entries association.

use crate::category::Category;
use crate::entry::PartitionerEntry;

/// An ordered, read-only collection of partitioner entries grouped by
/// category.
///
/// Categories keep the order in which they were first added; entries keep
/// their insertion order within a category. There is no way to change a
/// `Registry` once [`RegistryBuilder::build`] has produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    groups: Vec<(Category, Vec<PartitionerEntry>)>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.groups.iter().map(|(c, _)| c)
    }

    /// Entries of one category, in insertion order.
    pub fn entries(&self, category: &Category) -> Option<&[PartitionerEntry]> {
        self.groups
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, entries)| entries.as_slice())
    }

    /// `(category, entries)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[PartitionerEntry])> {
        self.groups.iter().map(|(c, e)| (c, e.as_slice()))
    }

    /// First entry with the given name, with its category.
    pub fn find(&self, name: &str) -> Option<(&Category, &PartitionerEntry)> {
        self.iter()
            .find_map(|(c, entries)| entries.iter().find(|e| e.name == name).map(|e| (c, e)))
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the registry holds no categories.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Consuming builder for [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    groups: Vec<(Category, Vec<PartitionerEntry>)>,
}

impl RegistryBuilder {
    /// Add entries under a category.
    ///
    /// A category seen before keeps its original position; the new entries
    /// are appended to its list.
    pub fn category(
        mut self,
        category: impl Into<Category>,
        entries: impl IntoIterator<Item = PartitionerEntry>,
    ) -> Self {
        let category = category.into();
        match self.groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => existing.extend(entries),
            None => self.groups.push((category, entries.into_iter().collect())),
        }
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            groups: self.groups,
        }
    }
}
