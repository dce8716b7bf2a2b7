//! Application layer services.
//!
//! Services consume repository traits and give handlers and the CLI a
//! narrow API.
//!
//! # Available Services
//!
//! - [`services::postcard_service::PostcardService`] - Postcard batches from the database
//! - [`services::postcard_service::PostcardBatch`] - Grouping, filtering and document output
//! - [`services::violation_service::ViolationService`] - Submission and ranking

pub mod services;
