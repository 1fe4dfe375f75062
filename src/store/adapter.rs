//! Storage adapter traits
//!
//! The seam between the pure query pipeline and whatever holds the
//! records. Handles are passed in explicitly wherever they are used;
//! there is no ambient global store.

use uuid::Uuid;

use crate::model::PartnerRecord;
use crate::query::QuerySpec;

use super::errors::StoreResult;

/// Read side of a partner store
pub trait PartnerSource: Send + Sync {
    /// Returns candidate records for a query.
    ///
    /// The contract is "everything that matches the spec, possibly
    /// more": an implementation may push parts of the filter down and
    /// return a narrowed superset, or ignore the spec entirely and
    /// return every record. The engine re-applies the full predicate
    /// either way, so partial push-down can never change results.
    fn fetch(&self, spec: &QuerySpec) -> StoreResult<Vec<PartnerRecord>>;

    /// Looks up one record by id
    fn get(&self, id: Uuid) -> StoreResult<PartnerRecord>;

    /// Returns every record, in insertion order
    fn snapshot(&self) -> StoreResult<Vec<PartnerRecord>>;
}

/// Write side of a partner store
///
/// Mutations are serialized by the implementation: a concurrent reader
/// sees the fully-old or fully-new record, never a partial write.
pub trait PartnerStore: PartnerSource {
    /// Appends a new record
    fn insert(&self, record: PartnerRecord) -> StoreResult<()>;

    /// Overwrites the record with the same id
    fn replace(&self, record: PartnerRecord) -> StoreResult<()>;

    /// Hard-deletes a record by id
    fn remove(&self, id: Uuid) -> StoreResult<()>;
}
