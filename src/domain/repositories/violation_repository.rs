//! Repository trait for violation records.

use crate::domain::entities::{NewViolation, Violation, ViolationRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// An address ranked by how many violations it has logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offender {
    pub address: String,
    pub offences: i64,
}

/// Repository interface for logged curbside violations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgViolationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViolationRepository: Send + Sync {
    /// Stores a new violation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_violation: NewViolation) -> Result<Violation, AppError>;

    /// Returns every violation, normalized, in arrival order.
    ///
    /// NULL columns come back as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_records(&self) -> Result<Vec<ViolationRecord>, AppError>;

    /// Returns the `limit` addresses with the most violations, most first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn worst_offenders(&self, limit: i64) -> Result<Vec<Offender>, AppError>;

    /// Round-trips a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
