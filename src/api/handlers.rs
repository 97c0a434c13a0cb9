//! HTTP request handlers for the Rateio Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_rateio, try_months_worked, validate_record};
use crate::models::{Claimant, WorkerForm};

use super::request::{PeriodPreviewRequest, RateioRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/records/validate", post(validate_record_handler))
        .route("/rateio", post(rateio_handler))
        .route("/periods/preview", post(period_preview_handler))
        .with_state(state)
}

/// Body returned by the period preview endpoint.
#[derive(Debug, Serialize)]
struct PeriodPreview {
    months_worked: Option<u32>,
}

async fn healthz_handler() -> &'static str {
    "ok"
}

/// Handler for POST /records/validate endpoint.
///
/// Accepts a worker registration form and returns the normalized record.
async fn validate_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkerForm>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record validation request");

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match validate_record(&form, state.config()) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                workplace = record.workplace.label(),
                months_worked = record.months_worked,
                "Record accepted"
            );
            json_response(StatusCode::OK, record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Record rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /rateio endpoint.
///
/// Splits the settlement amount across the claimants by months worked. The
/// configured default amount is used when the request carries none.
async fn rateio_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rateio request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let total_text = request
        .total
        .unwrap_or_else(|| state.config().default_total.clone());
    let claimants: Vec<Claimant> = request.claimants.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match calculate_rateio(&total_text, &claimants) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                claimants_count = claimants.len(),
                available = %result.summary.available,
                weight_sum = result.summary.weight_sum,
                duration_us = start_time.elapsed().as_micros(),
                "Rateio completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rateio failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /periods/preview endpoint.
async fn period_preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodPreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let months_worked = try_months_worked(
        &request.window_start,
        &request.window_end,
        &state.config().window,
    );
    info!(
        correlation_id = %correlation_id,
        months_worked = ?months_worked,
        "Period preview"
    );
    json_response(StatusCode::OK, PeriodPreview { months_worked })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    json_response(StatusCode::BAD_REQUEST, error)
}
