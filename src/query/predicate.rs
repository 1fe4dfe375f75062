//! Predicate construction and evaluation
//!
//! One predicate per query, built once from the spec and applied to every
//! record. Sub-predicates compose with AND only; each one passes
//! everything when its spec field is empty or absent.

use crate::model::{PartnerRecord, PartnerStatus};

use super::normalize::normalize;
use super::spec::QuerySpec;

/// The compiled filter for one query
///
/// Needles are normalized once at construction so evaluation never
/// re-folds the caller's input.
#[derive(Debug, Clone)]
pub struct PartnerPredicate {
    /// Normalized search needle; `None` when search is blank
    search: Option<String>,
    /// Exact status; `None` matches all statuses
    status: Option<PartnerStatus>,
    /// Exact, case-sensitive profession
    profession: Option<String>,
    /// Normalized classification tag
    classification: Option<String>,
}

impl PartnerPredicate {
    /// Compiles the filter portion of a query spec
    pub fn new(spec: &QuerySpec) -> Self {
        let search = match normalize(&spec.search) {
            s if s.is_empty() => None,
            s => Some(s),
        };

        let profession = spec
            .profession
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let classification = spec
            .classification
            .as_deref()
            .map(normalize)
            .filter(|c| !c.is_empty());

        Self {
            search,
            status: spec.status,
            profession,
            classification,
        }
    }

    /// Checks whether a record passes every sub-predicate (AND semantics)
    pub fn matches(&self, record: &PartnerRecord) -> bool {
        self.matches_status(record)
            && self.matches_profession(record)
            && self.matches_classification(record)
            && self.matches_search(record)
    }

    /// Exact status match; absent filter matches every status
    fn matches_status(&self, record: &PartnerRecord) -> bool {
        match self.status {
            Some(status) => record.status == status,
            None => true,
        }
    }

    /// Exact profession match, case-sensitive, never substring
    fn matches_profession(&self, record: &PartnerRecord) -> bool {
        match &self.profession {
            Some(profession) => record.profession == *profession,
            None => true,
        }
    }

    /// Tag membership under normalization
    fn matches_classification(&self, record: &PartnerRecord) -> bool {
        match &self.classification {
            Some(needle) => record
                .classifications
                .iter()
                .any(|tag| normalize(tag) == *needle),
            None => true,
        }
    }

    /// Substring match over any of the six searchable attributes.
    ///
    /// Short-circuits on the first hit; the outcome is defined as
    /// "any field matches", so field order never changes the result.
    fn matches_search(&self, record: &PartnerRecord) -> bool {
        match &self.search {
            Some(needle) => record
                .search_fields()
                .iter()
                .any(|field| normalize(field).contains(needle.as_str())),
            None => true,
        }
    }
}
