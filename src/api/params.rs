//! # Query Parameter Parsing
//!
//! Turns raw query-string parameters into a `QuerySpec`.
//!
//! Parsing never fails: out-of-range and unrecognized values coerce to
//! safe defaults instead of rejecting the request. A caller sending
//! garbage gets a well-formed (possibly default) query, not a 400.

use std::collections::HashMap;

use crate::model::PartnerStatus;
use crate::query::{QuerySpec, SortKey, SortOrder};

/// Maximum number of records per page
pub const MAX_LIMIT: usize = 100;

/// Default page size for the HTTP surface
pub const DEFAULT_LIMIT: usize = 10;

/// Parse query parameters from a HashMap into a `QuerySpec`
///
/// Coercion rules:
/// - `search` — trimmed, never length-limited
/// - `status` — unknown values are dropped, matching every status
/// - `profession`, `classification` — empty values are dropped
/// - `sortBy` — absent means company order; unrecognized means no sort
/// - `sortOrder` — anything but `desc` means ascending
/// - `page` — non-numeric or zero becomes 1
/// - `limit` — numeric values clamp to [1, `MAX_LIMIT`], otherwise
///   `default_limit`
pub fn parse_query(params: &HashMap<String, String>, default_limit: usize) -> QuerySpec {
    QuerySpec {
        search: params
            .get("search")
            .map(|raw| raw.trim().to_string())
            .unwrap_or_default(),
        status: params.get("status").and_then(|raw| PartnerStatus::parse(raw)),
        profession: params.get("profession").filter(|v| !v.is_empty()).cloned(),
        classification: params
            .get("classification")
            .filter(|v| !v.is_empty())
            .cloned(),
        sort_by: parse_sort_by(params.get("sortBy")),
        sort_order: parse_sort_order(params.get("sortOrder")),
        page: parse_page(params.get("page")),
        limit: parse_limit(params.get("limit"), default_limit),
    }
}

/// An absent key falls back to company order; a present but
/// unrecognized key disables sorting instead of guessing.
fn parse_sort_by(raw: Option<&String>) -> Option<SortKey> {
    match raw {
        None => Some(SortKey::Company),
        Some(value) => SortKey::parse(value),
    }
}

fn parse_sort_order(raw: Option<&String>) -> SortOrder {
    raw.and_then(|value| SortOrder::parse(value))
        .unwrap_or(SortOrder::Asc)
}

fn parse_page(raw: Option<&String>) -> usize {
    match raw.and_then(|value| value.parse::<usize>().ok()) {
        Some(page) => page.max(1),
        None => 1,
    }
}

fn parse_limit(raw: Option<&String>, default_limit: usize) -> usize {
    match raw.and_then(|value| value.parse::<usize>().ok()) {
        Some(limit) => limit.clamp(1, MAX_LIMIT),
        None => default_limit,
    }
}
