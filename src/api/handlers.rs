//! HTTP request handlers for the vacation calculator API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! request is computed from its own body and the configured default rates.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_hours;
use crate::error::EngineError;
use crate::report::build_report;

use super::request::{CalculationRequest, HoursRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/hours", post(hours_handler))
        .with_state(state)
}

/// Binds `addr` and serves the API until the process stops.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Vacation calculator API listening");
    axum::serve(listener, create_router(state)).await
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a list of vacations and an optional rate table, and returns the
/// report with one row per vacation plus totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let rates = match request.rates {
        Some(rates) => {
            if let Err(err) = rates.validate() {
                return engine_error_response(correlation_id, err);
            }
            rates
        }
        None => state.default_rates().clone(),
    };

    let start_time = Instant::now();
    match build_report(&request.vacations, &rates, Local::now().date_naive()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                vacations = report.totals.vacation_count,
                total_paid_hours = report.totals.total_paid_hours,
                total_amount = %report.totals.total_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /hours endpoint.
///
/// Returns the paid hour breakdown for a single pair of clock times.
async fn hours_handler(payload: Result<Json<HoursRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match calculate_hours(&request.start, &request.end) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                start = %request.start,
                end = %request.end,
                total_paid_hours = breakdown.total_paid_hours,
                "Hours computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdown),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error to its API status and body.
fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}
