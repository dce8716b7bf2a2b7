//! Business logic services for the application layer.

pub mod postcard_service;
pub mod violation_service;

pub use postcard_service::{PostcardBatch, PostcardService};
pub use violation_service::ViolationService;
