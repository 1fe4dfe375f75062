//! Partner record types
//!
//! The canonical stored shape of a partner contact:
//! - `id` is opaque and immutable once assigned
//! - `status` changes only through explicit transitions
//! - `classifications` is a deduplicated tag set
//! - `relations` is an ordered link list, used only as a cardinality signal
//! - `created_at` is immutable; `updated_at` refreshes on every mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a partner record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    /// Normal, visible record
    Active,
    /// Soft-removed, reversible via status update
    Archived,
    /// Excluded from business, kept for audit
    Blacklisted,
}

impl PartnerStatus {
    /// Returns the lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerStatus::Active => "active",
            PartnerStatus::Archived => "archived",
            PartnerStatus::Blacklisted => "blacklisted",
        }
    }

    /// Parses the lowercase wire form; unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(PartnerStatus::Active),
            "archived" => Some(PartnerStatus::Archived),
            "blacklisted" => Some(PartnerStatus::Blacklisted),
            _ => None,
        }
    }
}

impl std::fmt::Display for PartnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed link from one partner to another contact
///
/// Links are never deep-searched; queries only ever look at how many
/// a record has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationLink {
    /// Display name of the linked contact
    pub name: String,
    /// Company of the linked contact
    pub company: String,
    /// Free-text relation type ("supplier", "referral", ...)
    #[serde(default)]
    pub kind: String,
}

/// A stored partner record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRecord {
    /// Opaque unique identifier, assigned at creation
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub profession: String,
    pub email: String,
    pub phone: String,

    /// Quality score, always within [1, 5]
    pub rating: u8,

    /// Current lifecycle status
    pub status: PartnerStatus,

    /// Deduplicated tag set (first-seen casing kept for display)
    #[serde(default)]
    pub classifications: Vec<String>,

    /// Outgoing links; absent in input means empty
    #[serde(default)]
    pub relations: Vec<RelationLink>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartnerRecord {
    /// The six attributes that participate in free-text search
    pub fn search_fields(&self) -> [&str; 6] {
        [
            &self.first_name,
            &self.last_name,
            &self.profession,
            &self.company,
            &self.email,
            &self.phone,
        ]
    }
}
