//! Query engine orchestration
//!
//! The one place query semantics are composed, in strict order:
//!
//! 1. Build the predicate from the spec
//! 2. Filter the raw records (AND of all sub-predicates)
//! 3. Aggregate stats over the filtered, unpaginated set
//! 4. Sort with the stable comparator (or keep filtered order)
//! 5. Slice the requested page
//!
//! Every call site — HTTP list, HTTP stats, CLI one-shots, seed
//! verification — goes through here. Nothing else filters, sorts,
//! paginates or aggregates.
//!
//! The engine is pure: no I/O, no clock, no shared state. The same
//! records and spec always produce the same outcome, and it never
//! errors on filter/sort/page input because the boundary has already
//! coerced those.

use crate::model::PartnerRecord;

use super::paginate::{Page, Paginator};
use super::predicate::PartnerPredicate;
use super::sorter::PartnerSorter;
use super::spec::QuerySpec;
use super::stats::{DirectoryStats, StatsAggregator};

/// Everything one query produces
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The requested page of the filtered-and-sorted set
    pub page: Page<PartnerRecord>,
    /// Stats over the filtered set, independent of paging
    pub stats: DirectoryStats,
}

/// The canonical query pipeline
pub struct QueryEngine;

impl QueryEngine {
    /// Runs the full pipeline over an owned snapshot of records.
    pub fn execute(records: Vec<PartnerRecord>, spec: &QuerySpec) -> QueryOutcome {
        let predicate = PartnerPredicate::new(spec);

        let mut matched: Vec<PartnerRecord> = records
            .into_iter()
            .filter(|record| predicate.matches(record))
            .collect();

        // Stats come from the filtered set before any slicing
        let stats = StatsAggregator::aggregate(&matched);

        PartnerSorter::sort(&mut matched, spec.sort_by, spec.sort_order);
        let page = Paginator::paginate(matched, spec.page, spec.limit);

        QueryOutcome { page, stats }
    }

    /// Filter-and-aggregate only, for callers that never page.
    pub fn stats(records: Vec<PartnerRecord>, spec: &QuerySpec) -> DirectoryStats {
        let predicate = PartnerPredicate::new(spec);

        let matched: Vec<PartnerRecord> = records
            .into_iter()
            .filter(|record| predicate.matches(record))
            .collect();

        StatsAggregator::aggregate(&matched)
    }
}
