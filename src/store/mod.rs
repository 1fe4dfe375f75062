//! Storage adapter subsystem
//!
//! Supplies raw records to the query engine and serializes mutations.
//! Kept deliberately thin: load a JSON snapshot, hold records in
//! memory, save on demand. Deeper engines plug in behind the same
//! traits without touching query semantics.

mod adapter;
mod errors;
mod memory;

pub use adapter::{PartnerSource, PartnerStore};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
