//! HTTP API surface
//!
//! The boundary between the wire and the directory service:
//!
//! - `params` — infallible query-parameter coercion into a `QuerySpec`
//! - `response` — the uniform success/error envelope
//! - `errors` — boundary error taxonomy with stable codes
//! - `routes` — the Axum server and handlers
//!
//! # Design Principles
//!
//! - Query parsing never rejects a request; bad values coerce to defaults
//! - Error codes pass through from the service unchanged
//! - Storage detail is logged, never returned to the client

mod errors;
mod params;
mod response;
mod routes;

pub use errors::{ApiError, ApiResult};
pub use params::{parse_query, DEFAULT_LIMIT, MAX_LIMIT};
pub use response::{DeletedData, ErrorBody, ErrorDetail, HealthData, PartnerListData, SuccessBody};
pub use routes::ApiServer;
