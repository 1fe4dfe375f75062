//! rolodb - A deterministic partner directory with a canonical query engine
//!
//! One query pipeline (filter, aggregate, sort, paginate) serves every
//! surface: the HTTP API, the CLI, and the tests.

pub mod api;
pub mod cli;
pub mod directory;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
