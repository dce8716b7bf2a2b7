//! Handler for postcard document generation.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::postcards::PostcardQueryParams;
use crate::error::AppError;
use crate::state::AppState;

pub const POSTCARD_COUNT_HEADER: &str = "x-postcard-count";
pub const ADDRESS_COUNT_HEADER: &str = "x-address-count";

/// Renders postcards for every address over the threshold.
///
/// # Endpoint
///
/// `GET /api/postcards`
///
/// # Query Parameters
///
/// - `threshold` (optional): defaults to the configured `POSTCARD_THRESHOLD`
///
/// # Response
///
/// The LaTeX document as `application/x-tex`. `x-postcard-count` carries the
/// number of cards and `x-address-count` the number of distinct addresses
/// considered.
pub async fn postcards_handler(
    State(state): State<AppState>,
    query: Result<Query<PostcardQueryParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = query?;
    let threshold = params.threshold.unwrap_or(state.default_threshold);

    let batch = state.postcard_service.build_batch(threshold).await?;

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/x-tex")),
        (
            HeaderName::from_static(POSTCARD_COUNT_HEADER),
            HeaderValue::from(batch.card_count()),
        ),
        (
            HeaderName::from_static(ADDRESS_COUNT_HEADER),
            HeaderValue::from(batch.total_addresses()),
        ),
    ];

    Ok((headers, batch.to_document()).into_response())
}
