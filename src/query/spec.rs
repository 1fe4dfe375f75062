//! Query specification types
//!
//! A `QuerySpec` is the fully-coerced description of one query. The
//! boundary layers (HTTP params, CLI flags) are responsible for clamping
//! and defaulting; the engine trusts every field here as-is.

use crate::model::PartnerStatus;

/// Sortable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive company name
    Company,
    /// Numeric rating
    Rating,
    /// Number of relation links
    Relations,
}

impl SortKey {
    /// Parses the wire form; unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "company" => Some(SortKey::Company),
            "rating" => Some(SortKey::Rating),
            "relations" => Some(SortKey::Relations),
            _ => None,
        }
    }

    /// Returns the lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Company => "company",
            SortKey::Rating => "rating",
            SortKey::Relations => "relations",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses the wire form; unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// Returns the lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// A coerced query over the partner set
///
/// Field semantics:
/// - `search`: free text matched against six record attributes;
///   blank means match everything
/// - `status`: `None` means ALL statuses, not active-only
/// - `profession`: exact, case-sensitive match
/// - `classification`: case-insensitive tag membership
/// - `sort_by`: `None` is the defined no-op sort (filtered order kept)
/// - `page` is 1-based and already `>= 1`; `limit` is already in [1, 100]
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub search: String,
    pub status: Option<PartnerStatus>,
    pub profession: Option<String>,
    pub classification: Option<String>,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            profession: None,
            classification: None,
            sort_by: Some(SortKey::Company),
            sort_order: SortOrder::Asc,
            page: 1,
            limit: 10,
        }
    }
}
