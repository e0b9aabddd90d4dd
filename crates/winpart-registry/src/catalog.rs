//! The curated list of Windows-compatible partitioners.

use std::sync::OnceLock;

use crate::category::Category;
use crate::entry::{FlatRecord, PartitionerEntry};
use crate::flatten::flatten;
use crate::registry::Registry;

/// Build the curated Windows-compatible registry.
pub fn windows_compatible() -> Registry {
    Registry::builder()
        .category(
            Category::BACKEND_SPECIFIC,
            [
                PartitionerEntry::new(
                    "XnnpackPartitioner",
                    "executorch.backends.xnnpack.partition.xnnpack_partitioner",
                    "Main XNNPACK partitioner for CPU acceleration",
                )
                .with_variants([
                    "XnnpackDynamicallyQuantizedPartitioner",
                    "XnnpackFloatingPointPartitioner",
                    "XnnpackQuantizedPartitioner",
                ]),
                PartitionerEntry::new(
                    "OpenvinoPartitioner",
                    "executorch.backends.openvino.partitioner",
                    "OpenVINO partitioner for Intel hardware optimization",
                ),
                PartitionerEntry::new(
                    "CudaPartitioner",
                    "executorch.backends.cuda.cuda_partitioner",
                    "CUDA partitioner for NVIDIA GPU acceleration (experimental)",
                ),
                PartitionerEntry::new(
                    "VulkanPartitioner",
                    "executorch.backends.vulkan.partitioner.vulkan_partitioner",
                    "Vulkan partitioner for GPU acceleration",
                ),
                PartitionerEntry::new(
                    "AotiPartitioner",
                    "executorch.backends.aoti.aoti_partitioner",
                    "Base partitioner for AOTInductor-driven backends",
                ),
            ],
        )
        .category(
            Category::CANONICAL,
            [
                PartitionerEntry::new(
                    "AllNodePartitioner",
                    "executorch.exir.backend.canonical_partitioners.all_node_partitioner",
                    "Partitions all nodes in the graph to a specified backend",
                ),
                // Upstream class name, misspelling included.
                PartitionerEntry::new(
                    "ConfigerationBasedPartitioner",
                    "executorch.exir.backend.canonical_partitioners.config_partitioner",
                    "Configuration-driven partitioning base class",
                ),
                PartitionerEntry::new(
                    "GroupBasedPartitioner",
                    "executorch.exir.backend.canonical_partitioners.group_partitioner",
                    "Partitioner that allows explicit grouping of nodes",
                ),
            ],
        )
        .category(
            Category::EXAMPLE,
            [PartitionerEntry::new(
                "ExamplePartitioner",
                "executorch.backends.example.example_partitioner",
                "Example partitioner for add/mul operations",
            )],
        )
        .build()
}

/// The process-wide curated registry, built on first use.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(windows_compatible)
}

/// Every Windows-compatible partitioner, flattened in display order.
pub fn list_all_windows_partitioners() -> Vec<FlatRecord<'static>> {
    flatten(default_registry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::count_in;
    use crate::validate::validate;

    #[test]
    fn category_sizes() {
        let r = windows_compatible();
        let labels: Vec<_> = r.categories().map(Category::label).collect();
        assert_eq!(
            labels,
            ["Backend-Specific", "Canonical (Platform-Agnostic)", "Example/Demo"]
        );
        assert_eq!(r.entries(&Category::BACKEND_SPECIFIC).unwrap().len(), 5);
        assert_eq!(r.entries(&Category::CANONICAL).unwrap().len(), 3);
        assert_eq!(r.entries(&Category::EXAMPLE).unwrap().len(), 1);
    }

    #[test]
    fn nine_partitioners_total() {
        let records = list_all_windows_partitioners();
        assert_eq!(records.len(), 9);
        assert_eq!(count_in(&records, &Category::BACKEND_SPECIFIC), 5);
        assert_eq!(list_all_windows_partitioners(), records);
    }

    #[test]
    fn xnnpack_variants() {
        let r = windows_compatible();
        let (cat, e) = r.find("XnnpackPartitioner").unwrap();
        assert_eq!(*cat, Category::BACKEND_SPECIFIC);
        assert_eq!(
            e.variants_display().as_deref(),
            Some(
                "XnnpackDynamicallyQuantizedPartitioner, XnnpackFloatingPointPartitioner, \
                 XnnpackQuantizedPartitioner"
            )
        );
    }

    #[test]
    fn openvino_has_no_variants() {
        let record = list_all_windows_partitioners()
            .into_iter()
            .find(|r| r.name == "OpenvinoPartitioner")
            .unwrap();
        assert!(record.variants.is_empty());
        assert_eq!(record.module, "executorch.backends.openvino.partitioner");
    }

    #[test]
    fn default_registry_is_shared() {
        assert!(std::ptr::eq(default_registry(), default_registry()));
        assert_eq!(*default_registry(), windows_compatible());
    }

    #[test]
    fn curated_data_is_clean() {
        assert!(validate(&windows_compatible()).is_empty());
    }
}
