//! # HTTP Server
//!
//! Axum-based HTTP server for the partner directory.
//!
//! Routes:
//! - `GET    /api/v1/partners` — query with filter/sort/paginate
//! - `POST   /api/v1/partners` — create
//! - `GET    /api/v1/partners/stats` — aggregate stats
//! - `GET    /api/v1/partners/{id}` — fetch one
//! - `PATCH  /api/v1/partners/{id}` — partial update
//! - `DELETE /api/v1/partners/{id}` — hard delete
//! - `PATCH  /api/v1/partners/{id}/status` — lifecycle transition
//! - `GET    /health` — liveness

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::directory::{Directory, DirectoryError, FieldViolation};
use crate::model::{PartnerDraft, PartnerPatch, PartnerRecord, PartnerStatus};
use crate::observability::{log_event_with_fields, Event};
use crate::query::{DirectoryStats, QuerySpec};
use crate::store::PartnerStore;

use super::errors::{ApiError, ApiResult};
use super::params::{parse_query, DEFAULT_LIMIT};
use super::response::{DeletedData, HealthData, PartnerListData, SuccessBody};

/// HTTP server state over a storage adapter
pub struct ApiServer<S: PartnerStore> {
    directory: Directory<S>,
    cors_origins: Vec<String>,
    default_limit: usize,
}

impl<S: PartnerStore + 'static> ApiServer<S> {
    pub fn new(directory: Directory<S>) -> Self {
        Self {
            directory,
            cors_origins: Vec::new(),
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Restrict CORS to the given origins (empty = permissive)
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Page size used when the request does not name one
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let cors = build_cors(&self.cors_origins);
        let state = Arc::new(self);

        Router::new()
            .route("/api/v1/partners", get(list_handler))
            .route("/api/v1/partners", post(create_handler))
            .route("/api/v1/partners/stats", get(stats_handler))
            .route("/api/v1/partners/{id}", get(get_handler))
            .route("/api/v1/partners/{id}", patch(update_handler))
            .route("/api/v1/partners/{id}", delete(delete_handler))
            .route("/api/v1/partners/{id}/status", patch(status_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(cors)
    }
}

/// Shared state type
type ServerState<S> = Arc<ApiServer<S>>;

/// Configure CORS: explicit origin list when configured, permissive
/// otherwise (development)
fn build_cors(cors_origins: &[String]) -> CorsLayer {
    if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = cors_origins.iter().filter_map(|s| s.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Path ids that are not UUIDs cannot name a record, so they report as
/// not-found rather than leaking the id format
fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::UnknownId(raw.to_string()))
}

/// Lifecycle transition body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StatusChange {
    status: Option<String>,
}

/// Query partners handler
async fn list_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SuccessBody<PartnerListData>>, ApiError> {
    let spec = parse_query(&params, server.default_limit);
    let outcome = server.directory.query(&spec)?;

    let page = outcome.page.page.to_string();
    let returned = outcome.page.items.len().to_string();
    let total = outcome.page.total.to_string();
    log_event_with_fields(
        Event::QueryComplete,
        &[("page", &page), ("returned", &returned), ("total", &total)],
    );

    Ok(Json(SuccessBody::new(PartnerListData::from(outcome.page))))
}

/// Create partner handler
async fn create_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
    body: Result<Json<PartnerDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessBody<PartnerRecord>>), ApiError> {
    let Json(draft) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let record = server.directory.create(draft)?;

    let id = record.id.to_string();
    log_event_with_fields(
        Event::PartnerCreated,
        &[("company", &record.company), ("id", &id)],
    );

    Ok((StatusCode::CREATED, Json(SuccessBody::new(record))))
}

/// Fetch single partner handler
async fn get_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessBody<PartnerRecord>>, ApiError> {
    let id = parse_id(&id)?;
    let record = server.directory.get(id)?;

    Ok(Json(SuccessBody::new(record)))
}

/// Partial update handler
async fn update_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
    body: Result<Json<PartnerPatch>, JsonRejection>,
) -> Result<Json<SuccessBody<PartnerRecord>>, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let record = server.directory.update(id, patch)?;

    let id = record.id.to_string();
    log_event_with_fields(Event::PartnerUpdated, &[("id", &id)]);

    Ok(Json(SuccessBody::new(record)))
}

/// Hard delete handler
async fn delete_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessBody<DeletedData>>, ApiError> {
    let id = parse_id(&id)?;
    server.directory.delete(id)?;

    let id = id.to_string();
    log_event_with_fields(Event::PartnerDeleted, &[("id", &id)]);

    Ok(Json(SuccessBody::new(DeletedData::confirmed())))
}

/// Lifecycle transition handler
async fn status_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
    body: Result<Json<StatusChange>, JsonRejection>,
) -> Result<Json<SuccessBody<PartnerRecord>>, ApiError> {
    let id = parse_id(&id)?;
    let Json(change) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let status = change
        .status
        .as_deref()
        .and_then(PartnerStatus::parse)
        .ok_or_else(|| {
            DirectoryError::Validation(vec![FieldViolation::new(
                "status",
                "must be one of: active, archived, blacklisted",
            )])
        })?;

    let record = server.directory.set_status(id, status)?;

    let id = record.id.to_string();
    log_event_with_fields(
        Event::PartnerStatusChanged,
        &[("id", &id), ("status", record.status.as_str())],
    );

    Ok(Json(SuccessBody::new(record)))
}

/// Aggregate stats handler
async fn stats_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SuccessBody<DirectoryStats>>, ApiError> {
    let spec = parse_query(&params, server.default_limit);
    let stats = server.directory.stats(&spec)?;

    let total = stats.total.to_string();
    log_event_with_fields(Event::StatsComplete, &[("total", &total)]);

    Ok(Json(SuccessBody::new(stats)))
}

/// Liveness handler
async fn health_handler<S: PartnerStore + 'static>(
    State(server): State<ServerState<S>>,
) -> Result<Json<SuccessBody<HealthData>>, ApiError> {
    let stats = server.directory.stats(&QuerySpec::default())?;

    Ok(Json(SuccessBody::new(HealthData::ok(stats.total))))
}
