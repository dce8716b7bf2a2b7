//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::services::{PostcardService, ViolationService};
use crate::domain::repositories::ViolationRepository;

#[derive(Clone)]
pub struct AppState {
    pub violation_service: Arc<ViolationService>,
    pub postcard_service: Arc<PostcardService>,
    /// Threshold used by `/api/postcards` when the request names none.
    pub default_threshold: usize,
}

impl AppState {
    /// Wires both services to one repository.
    pub fn new(repository: Arc<dyn ViolationRepository>, default_threshold: usize) -> Self {
        Self {
            violation_service: Arc::new(ViolationService::new(repository.clone())),
            postcard_service: Arc::new(PostcardService::new(repository)),
            default_threshold,
        }
    }
}
