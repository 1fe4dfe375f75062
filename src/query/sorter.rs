//! Record sorting
//!
//! Deterministic, stable ordering over the filtered set. Descending is
//! always the exact reverse of ascending, never a second algorithm.

use std::cmp::Ordering;

use crate::model::PartnerRecord;

use super::normalize::normalize;
use super::spec::{SortKey, SortOrder};

/// Sorts partner records
pub struct PartnerSorter;

impl PartnerSorter {
    /// Sorts records in place by the given key and direction.
    ///
    /// The sort is stable: records comparing equal keep their filtered
    /// relative order. `sort_by = None` is the defined no-op and leaves
    /// the slice untouched.
    pub fn sort(records: &mut [PartnerRecord], sort_by: Option<SortKey>, order: SortOrder) {
        let Some(key) = sort_by else {
            return;
        };

        records.sort_by(|a, b| {
            let ordering = Self::compare(a, b, key);

            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    /// Ascending comparison for a single key.
    ///
    /// - `Company`: case-insensitive on the normalized name
    /// - `Rating`: numeric
    /// - `Relations`: link count (absent list counts as zero)
    pub fn compare(a: &PartnerRecord, b: &PartnerRecord, key: SortKey) -> Ordering {
        match key {
            SortKey::Company => normalize(&a.company).cmp(&normalize(&b.company)),
            SortKey::Rating => a.rating.cmp(&b.rating),
            SortKey::Relations => a.relations.len().cmp(&b.relations.len()),
        }
    }
}
