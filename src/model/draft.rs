//! Write payloads for partner records
//!
//! Drafts and patches deliberately cannot carry `id`, `created_at` or
//! `updated_at`: those are assigned by the directory, never by callers.
//! A draft also carries no status; every record starts out active.
//!
//! Draft fields are all deserialization-optional so validation can
//! report every missing or blank required field at once instead of
//! stopping at the first parse failure.

use serde::Deserialize;

use super::partner::{PartnerStatus, RelationLink};

/// Neutral midpoint used when a draft omits the rating
pub const DEFAULT_RATING: u8 = 3;

/// Payload for creating a partner
///
/// Legacy spellings (`firstname`, `lastname`, `job`) are accepted on
/// input; output is always canonical camelCase.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDraft {
    #[serde(default, alias = "firstname")]
    pub first_name: Option<String>,

    #[serde(default, alias = "lastname")]
    pub last_name: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default, alias = "job")]
    pub profession: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub rating: Option<u8>,

    #[serde(default)]
    pub classifications: Vec<String>,

    #[serde(default)]
    pub relations: Vec<RelationLink>,
}

/// Payload for partially updating a partner
///
/// Only present fields change. A present `status` is the explicit
/// transition path through update; status never changes otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPatch {
    #[serde(default, alias = "firstname")]
    pub first_name: Option<String>,

    #[serde(default, alias = "lastname")]
    pub last_name: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default, alias = "job")]
    pub profession: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub rating: Option<u8>,

    #[serde(default)]
    pub status: Option<PartnerStatus>,

    #[serde(default)]
    pub classifications: Option<Vec<String>>,

    #[serde(default)]
    pub relations: Option<Vec<RelationLink>>,
}

impl PartnerPatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.company.is_none()
            && self.profession.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.rating.is_none()
            && self.status.is_none()
            && self.classifications.is_none()
            && self.relations.is_none()
    }
}
