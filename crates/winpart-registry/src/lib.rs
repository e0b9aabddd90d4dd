//! Registry of partitioners known to work on Windows builds of the host
//! toolkit.
//!
//! The registry is static data: a fixed, ordered set of categories, each
//! holding partitioner descriptors. Module paths are recorded as opaque
//! strings and never resolved.
//!
//! # Architecture
//!
//! Data flows one way:
//! - **Registry**: immutable category → entries association, built once
//! - **Flattener**: one [`FlatRecord`] per entry, annotated with its category
//! - **Reporter**: human-readable text, with a total taken from the flattener

pub mod catalog;
pub mod category;
pub mod entry;
pub mod error;
pub mod flatten;
pub mod registry;
pub mod report;
pub mod validate;

// Re-exports for convenience.
pub use catalog::{default_registry, list_all_windows_partitioners, windows_compatible};
pub use category::Category;
pub use entry::{FlatRecord, PartitionerEntry};
pub use error::{RegistryError, Result};
pub use flatten::{count_in, flatten, to_json};
pub use registry::{Registry, RegistryBuilder};
pub use report::{format_report, print_report, render};
pub use validate::{validate, RegistryIssue};
