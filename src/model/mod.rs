//! Partner data model
//!
//! Stored records plus the write payloads that produce them:
//!
//! - `PartnerRecord` is the canonical stored shape
//! - `PartnerDraft` creates one (server assigns id, status, timestamps)
//! - `PartnerPatch` partially updates one (only present fields change)

mod draft;
mod partner;

pub use draft::{PartnerDraft, PartnerPatch, DEFAULT_RATING};
pub use partner::{PartnerRecord, PartnerStatus, RelationLink};
