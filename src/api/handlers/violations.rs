//! Handlers for violation submission and ranking.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::offenders::{OffenderItem, WorstQueryParams, WorstResponse};
use crate::api::dto::violation::{SubmitViolationRequest, ViolationResponse};
use crate::application::services::violation_service::DEFAULT_WORST_LIMIT;
use crate::error::AppError;
use crate::state::AppState;

/// Records one violation.
///
/// # Endpoint
///
/// `POST /api/violations`
///
/// # Request Body
///
/// ```json
/// {
///   "house_number": "123",
///   "street": "Main St",
///   "date": "2018-01-02",   // optional, defaults to today
///   "not_out": true,        // optional flags, default false
///   "details": "Cart behind fence"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn submit_violation_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitViolationRequest>,
) -> Result<(StatusCode, Json<ViolationResponse>), AppError> {
    payload.validate()?;

    let violation = state.violation_service.submit(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(violation.into())))
}

/// Lists the addresses with the most logged violations.
///
/// # Endpoint
///
/// `GET /api/violations/worst`
///
/// # Query Parameters
///
/// - `limit` (optional): Number of addresses (default: 10, max: 100)
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is not a number or out of range.
pub async fn worst_offenders_handler(
    State(state): State<AppState>,
    query: Result<Query<WorstQueryParams>, QueryRejection>,
) -> Result<Json<WorstResponse>, AppError> {
    let Query(params) = query?;
    let limit = params.limit.unwrap_or(DEFAULT_WORST_LIMIT);

    let offenders = state.violation_service.worst_offenders(limit).await?;

    Ok(Json(WorstResponse {
        items: offenders.into_iter().map(OffenderItem::from).collect(),
    }))
}
