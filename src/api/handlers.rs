//! HTTP request handlers for the break audit API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::ingest::{parse_break_sheet, parse_timecard};
use crate::recon::reconcile;

use super::request::ReconcileRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Handler for the POST /reconcile endpoint.
///
/// Accepts both source documents as raw CSV text and returns the
/// discrepancy report for the requested date.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let timecard_entries = match parse_timecard(&request.timecard_csv) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timecard ingestion failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let break_entries = match parse_break_sheet(&request.break_sheet_csv) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Break sheet ingestion failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let options = request.effective_options(state.options());

    let start_time = Instant::now();
    let report = reconcile(
        &timecard_entries,
        &break_entries,
        request.target_date,
        &options,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        report_id = %report.report_id,
        target_date = %report.target_date,
        employees = report.summary.total_employees,
        mismatches = report.summary.mismatches,
        duration_us = duration.as_micros(),
        "Reconciliation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
