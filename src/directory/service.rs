//! Directory service
//!
//! The single mutation path for partner records, and the read-side
//! composition of store + engine. Every operation:
//!
//! - validates before it touches the store (all-or-nothing)
//! - assigns server-owned fields (`id`, timestamps, initial status)
//! - refreshes `updated_at` on every mutation
//!
//! The service is generic over the store and receives its handle
//! explicitly; there is no global.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::model::{PartnerDraft, PartnerPatch, PartnerRecord, PartnerStatus, DEFAULT_RATING};
use crate::query::{DirectoryStats, QueryEngine, QueryOutcome, QuerySpec};
use crate::store::{PartnerStore, StoreError};

use super::errors::{DirectoryError, DirectoryResult, FieldViolation};
use super::validate::{canonical_classifications, PartnerValidator};

/// Partner directory over a storage adapter
pub struct Directory<S: PartnerStore> {
    store: Arc<S>,
    validator: PartnerValidator,
}

impl<S: PartnerStore> Directory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            validator: PartnerValidator::new(),
        }
    }

    /// Creates a record from a draft.
    ///
    /// The server assigns `id`, both timestamps, and the initial
    /// `active` status; a caller cannot supply any of them.
    pub fn create(&self, draft: PartnerDraft) -> DirectoryResult<PartnerRecord> {
        self.validator
            .validate_draft(&draft)
            .map_err(DirectoryError::Validation)?;

        let now = Utc::now();
        let record = PartnerRecord {
            id: Uuid::new_v4(),
            first_name: draft.first_name.unwrap_or_default(),
            last_name: draft.last_name.unwrap_or_default(),
            company: draft.company.unwrap_or_default(),
            profession: draft.profession.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
            phone: draft.phone.unwrap_or_default(),
            rating: draft.rating.unwrap_or(DEFAULT_RATING),
            status: PartnerStatus::Active,
            classifications: canonical_classifications(&draft.classifications),
            relations: draft.relations,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(record.clone()).map_err(store_failure)?;
        Ok(record)
    }

    /// Looks up one record by id
    pub fn get(&self, id: Uuid) -> DirectoryResult<PartnerRecord> {
        self.store.get(id).map_err(store_failure)
    }

    /// Applies a partial update.
    ///
    /// Only present fields change; `updated_at` refreshes on every
    /// successful call. A present `status` is an explicit transition —
    /// status never changes as a side effect of anything else.
    pub fn update(&self, id: Uuid, patch: PartnerPatch) -> DirectoryResult<PartnerRecord> {
        self.validator
            .validate_patch(&patch)
            .map_err(DirectoryError::Validation)?;

        let mut record = self.store.get(id).map_err(store_failure)?;

        if let Some(first_name) = patch.first_name {
            record.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            record.last_name = last_name;
        }
        if let Some(company) = patch.company {
            record.company = company;
        }
        if let Some(profession) = patch.profession {
            record.profession = profession;
        }
        if let Some(email) = patch.email {
            record.email = email;
        }
        if let Some(phone) = patch.phone {
            record.phone = phone;
        }
        if let Some(rating) = patch.rating {
            record.rating = rating;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        if let Some(classifications) = patch.classifications {
            record.classifications = canonical_classifications(&classifications);
        }
        if let Some(relations) = patch.relations {
            record.relations = relations;
        }

        record.updated_at = Utc::now();

        self.store.replace(record.clone()).map_err(store_failure)?;
        Ok(record)
    }

    /// Transitions a record's lifecycle status.
    ///
    /// Archive and blacklist both keep the record queryable under its
    /// new status; hard delete is the separate, irreversible path.
    pub fn set_status(&self, id: Uuid, status: PartnerStatus) -> DirectoryResult<PartnerRecord> {
        let mut record = self.store.get(id).map_err(store_failure)?;

        record.status = status;
        record.updated_at = Utc::now();

        self.store.replace(record.clone()).map_err(store_failure)?;
        Ok(record)
    }

    /// Hard-deletes a record; reversible only by re-creation
    pub fn delete(&self, id: Uuid) -> DirectoryResult<()> {
        self.store.remove(id).map_err(store_failure)
    }

    /// Runs one query through the canonical engine
    pub fn query(&self, spec: &QuerySpec) -> DirectoryResult<QueryOutcome> {
        let records = self.store.fetch(spec).map_err(store_failure)?;
        Ok(QueryEngine::execute(records, spec))
    }

    /// Aggregates stats over the filtered, unpaginated set
    pub fn stats(&self, spec: &QuerySpec) -> DirectoryResult<DirectoryStats> {
        let records = self.store.fetch(spec).map_err(store_failure)?;
        Ok(QueryEngine::stats(records, spec))
    }

    /// Imports a batch of drafts through the create path.
    ///
    /// All-or-nothing: every draft is validated first, with violations
    /// prefixed by their list position, and nothing is inserted unless
    /// the whole batch passes.
    pub fn seed(&self, drafts: Vec<PartnerDraft>) -> DirectoryResult<usize> {
        let mut violations = Vec::new();

        for (index, draft) in drafts.iter().enumerate() {
            if let Err(errors) = self.validator.validate_draft(draft) {
                violations.extend(errors.into_iter().map(|v| {
                    FieldViolation::new(format!("partners[{}].{}", index, v.field), v.message)
                }));
            }
        }

        if !violations.is_empty() {
            return Err(DirectoryError::Validation(violations));
        }

        let count = drafts.len();
        for draft in drafts {
            self.create(draft)?;
        }

        Ok(count)
    }
}

/// Maps adapter failures for callers: a missing record keeps its
/// identity, everything else becomes the generic internal error.
fn store_failure(err: StoreError) -> DirectoryError {
    match err {
        StoreError::NotFound(id) => DirectoryError::NotFound(id),
        other => DirectoryError::Store(other),
    }
}
