//! API route configuration.

use crate::api::handlers::{
    postcards_handler, submit_violation_handler, worst_offenders_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `POST /violations`        - Record a violation
/// - `GET  /violations/worst`  - Addresses with the most violations
/// - `GET  /postcards`         - LaTeX postcards for addresses over the threshold
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/violations", post(submit_violation_handler))
        .route("/violations/worst", get(worst_offenders_handler))
        .route("/postcards", get(postcards_handler))
}
