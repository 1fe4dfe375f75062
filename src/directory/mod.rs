//! Partner directory
//!
//! Record lifecycle and validation on top of a storage adapter:
//!
//! - `Directory` — the single mutation path (create/update/status/delete)
//!   and the read-side composition of store + query engine
//! - `PartnerValidator` — all-or-nothing draft and patch validation
//! - `DirectoryError` — the service-level error taxonomy with stable codes

mod errors;
mod service;
mod validate;

pub use errors::{DirectoryError, DirectoryResult, FieldViolation};
pub use service::Directory;
pub use validate::{
    canonical_classifications, PartnerValidator, MAX_RATING, MIN_RATING,
};
