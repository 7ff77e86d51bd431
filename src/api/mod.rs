//! HTTP API module for the break audit engine.
//!
//! This module provides the REST API endpoint for reconciling a timecard
//! export against a transcribed break sheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReconcileRequest;
pub use response::ApiError;
pub use state::AppState;
