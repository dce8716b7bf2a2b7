//! HTTP request handlers for API endpoints.

pub mod health;
pub mod postcards;
pub mod violations;

pub use health::health_handler;
pub use postcards::postcards_handler;
pub use violations::{submit_violation_handler, worst_offenders_handler};
