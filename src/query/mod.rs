//! Query subsystem for rolodb
//!
//! The canonical pipeline every call site shares. One query flows
//! through, in strict order:
//!
//! 1. Normalize caller text into the comparable form
//! 2. Build one predicate (AND of independent sub-predicates)
//! 3. Filter the record set
//! 4. Sort with a stable comparator (descending = reverse ascending)
//! 5. Slice the requested page
//!
//! Aggregation runs beside the page over the filtered, unpaginated set.
//!
//! # Invariants
//!
//! - Pure and deterministic: same records + same spec = same outcome
//! - Empty filter fields pass everything; empty status means ALL statuses
//! - Unrecognized sort keys keep the filtered order (defined no-op)
//! - Page/limit never influence stats

mod engine;
mod normalize;
mod paginate;
mod predicate;
mod sorter;
mod spec;
mod stats;

pub use engine::{QueryEngine, QueryOutcome};
pub use normalize::normalize;
pub use paginate::{Page, Paginator};
pub use predicate::PartnerPredicate;
pub use sorter::PartnerSorter;
pub use spec::{QuerySpec, SortKey, SortOrder};
pub use stats::{DirectoryStats, StatsAggregator};
