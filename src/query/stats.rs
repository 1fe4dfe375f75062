//! Aggregate statistics over a filtered record set
//!
//! Stats are derived on demand and never persisted. They are computed
//! from the filtered-but-unpaginated set, so page and limit can never
//! change them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::PartnerRecord;

/// Summary numbers for a record set
///
/// Bucket maps are ordered so serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    /// Records in the set
    pub total: usize,
    /// Mean rating; 0.0 for the empty set, never NaN
    pub average_rating: f64,
    /// Count per status (lowercase keys)
    pub by_status: BTreeMap<String, usize>,
    /// Count per profession (stored casing)
    pub by_profession: BTreeMap<String, usize>,
    /// Count per classification tag; a record with N tags lands in N buckets
    pub by_classification: BTreeMap<String, usize>,
}

impl DirectoryStats {
    /// Stats for an empty set
    pub fn empty() -> Self {
        Self {
            total: 0,
            average_rating: 0.0,
            by_status: BTreeMap::new(),
            by_profession: BTreeMap::new(),
            by_classification: BTreeMap::new(),
        }
    }
}

/// Computes directory statistics
pub struct StatsAggregator;

impl StatsAggregator {
    /// Aggregates one pass over the records.
    ///
    /// Status and profession contribute one bucket increment per record;
    /// classifications fan out to one increment per tag per record.
    pub fn aggregate(records: &[PartnerRecord]) -> DirectoryStats {
        if records.is_empty() {
            return DirectoryStats::empty();
        }

        let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_profession: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_classification: BTreeMap<String, usize> = BTreeMap::new();
        let mut rating_sum: u64 = 0;

        for record in records {
            rating_sum += u64::from(record.rating);

            *by_status.entry(record.status.as_str().to_string()).or_default() += 1;
            *by_profession.entry(record.profession.clone()).or_default() += 1;

            for tag in &record.classifications {
                *by_classification.entry(tag.clone()).or_default() += 1;
            }
        }

        DirectoryStats {
            total: records.len(),
            average_rating: rating_sum as f64 / records.len() as f64,
            by_status,
            by_profession,
            by_classification,
        }
    }
}
