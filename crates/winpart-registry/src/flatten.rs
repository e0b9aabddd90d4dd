//! Flattening the registry into one ordered record sequence.

use tracing::debug;

use crate::category::Category;
use crate::entry::FlatRecord;
use crate::error::Result;
use crate::registry::Registry;

/// One record per entry, categories and entries in registry order.
pub fn flatten(registry: &Registry) -> Vec<FlatRecord<'_>> {
    let records: Vec<_> = registry
        .iter()
        .flat_map(|(category, entries)| entries.iter().map(move |e| FlatRecord::new(category, e)))
        .collect();
    debug!(
        categories = registry.category_count(),
        records = records.len(),
        "flattened registry"
    );
    records
}

/// Number of records belonging to `category`.
pub fn count_in(records: &[FlatRecord<'_>], category: &Category) -> usize {
    records.iter().filter(|r| r.category == category).count()
}

/// Pretty JSON array of the records, for tooling.
pub fn to_json(records: &[FlatRecord<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::PartitionerEntry;

    fn sample() -> Registry {
        Registry::builder()
            .category(
                "First",
                [
                    PartitionerEntry::new("A", "m.a", "a").with_variants(["A1", "A2"]),
                    PartitionerEntry::new("B", "m.b", "b"),
                ],
            )
            .category("Empty", Vec::<PartitionerEntry>::new())
            .category("Second", [PartitionerEntry::new("C", "m.c", "c")])
            .build()
    }

    #[test]
    fn one_record_per_entry_in_order() {
        let r = sample();
        let records = flatten(&r);
        let names: Vec<_> = records.iter().map(|r| r.name).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(records[2].category.label(), "Second");
    }

    #[test]
    fn per_category_counts_match_registry() {
        let r = sample();
        let records = flatten(&r);
        for (category, entries) in r.iter() {
            assert_eq!(count_in(&records, category), entries.len());
        }
    }

    #[test]
    fn deterministic() {
        let r = sample();
        assert_eq!(flatten(&r), flatten(&r));
    }

    #[test]
    fn absent_variants_are_empty() {
        let r = sample();
        let records = flatten(&r);
        assert_eq!(records[0].variants, ["A1", "A2"]);
        assert!(records[1].variants.is_empty());
    }

    #[test]
    fn json_lists_every_record() {
        let r = sample();
        let json = to_json(&flatten(&r)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0]["variants"], serde_json::json!(["A1", "A2"]));
        assert_eq!(arr[1]["category"], "First");
    }
}
