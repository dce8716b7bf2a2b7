//! Recording and ranking curbside violations.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewViolation, Violation};
use crate::domain::repositories::{Offender, ViolationRepository};
use crate::error::AppError;

pub const DEFAULT_WORST_LIMIT: i64 = 10;
pub const MAX_WORST_LIMIT: i64 = 100;

/// Service behind the submission and ranking endpoints.
pub struct ViolationService {
    repository: Arc<dyn ViolationRepository>,
}

impl ViolationService {
    pub fn new(repository: Arc<dyn ViolationRepository>) -> Self {
        Self { repository }
    }

    /// Records one violation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the house number or street is blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn submit(&self, new_violation: NewViolation) -> Result<Violation, AppError> {
        if new_violation.house_number.trim().is_empty() || new_violation.street.trim().is_empty()
        {
            return Err(AppError::bad_request(
                "House number and street are required",
                json!({
                    "house_number": new_violation.house_number,
                    "street": new_violation.street,
                }),
            ));
        }

        let violation = self.repository.create(new_violation).await?;
        tracing::info!(
            id = violation.id,
            address = %format!("{} {}", violation.house_number, violation.street),
            "violation recorded"
        );
        Ok(violation)
    }

    /// Addresses with the most violations, most first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is outside `1..=100`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn worst_offenders(&self, limit: i64) -> Result<Vec<Offender>, AppError> {
        if !(1..=MAX_WORST_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                format!("Limit must be between 1 and {MAX_WORST_LIMIT}"),
                json!({ "limit": limit }),
            ));
        }

        self.repository.worst_offenders(limit).await
    }

    /// Checks the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the repository error when it is not.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
