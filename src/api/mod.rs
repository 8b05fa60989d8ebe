//! Triage HTTP API.
//!
//! Chat analysis, structured symptom analysis, vitals recording and a
//! health check, all nested under `/api/`. `triage_router()` returns a
//! `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::triage_router;
pub use server::{start_server, start_server_on, ServerError, ServerSession, TriageServer};
pub use types::ApiContext;
