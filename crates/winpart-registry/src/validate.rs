//! Data checks for registry contents.
//!
//! The registry never rejects data at construction. These checks let a
//! caller surface curated-data defects (repeated names, blank fields)
//! without changing what gets flattened or reported.

use std::collections::HashMap;

use crate::category::Category;
use crate::error::{RegistryError, Result};
use crate::registry::Registry;

/// A defect found in registry data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    /// `name` was first seen in `first` and again in `second`.
    DuplicateName {
        name: String,
        first: Category,
        second: Category,
    },
    /// The entry at `index` within `category` has a blank `field`.
    EmptyField {
        category: Category,
        index: usize,
        field: &'static str,
    },
}

impl From<RegistryIssue> for RegistryError {
    fn from(issue: RegistryIssue) -> Self {
        match issue {
            RegistryIssue::DuplicateName {
                name,
                first,
                second,
            } => RegistryError::DuplicateName {
                name,
                first: first.to_string(),
                second: second.to_string(),
            },
            RegistryIssue::EmptyField {
                category,
                index,
                field,
            } => RegistryError::EmptyField {
                category: category.to_string(),
                index,
                field,
            },
        }
    }
}

/// Collect every issue, in registry order.
pub fn validate(registry: &Registry) -> Vec<RegistryIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, &Category> = HashMap::new();

    for (category, entries) in registry.iter() {
        for (index, entry) in entries.iter().enumerate() {
            for (field, value) in [
                ("name", &entry.name),
                ("module", &entry.module),
                ("description", &entry.description),
            ] {
                if value.trim().is_empty() {
                    issues.push(RegistryIssue::EmptyField {
                        category: category.clone(),
                        index,
                        field,
                    });
                }
            }

            if entry.name.is_empty() {
                continue;
            }
            if let Some(first) = seen.get(entry.name.as_str()) {
                issues.push(RegistryIssue::DuplicateName {
                    name: entry.name.clone(),
                    first: (*first).clone(),
                    second: category.clone(),
                });
            } else {
                seen.insert(&entry.name, category);
            }
        }
    }

    issues
}

impl Registry {
    /// Fail on the first data issue.
    pub fn check(&self) -> Result<()> {
        match validate(self).into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }
}
