//! PostgreSQL repository implementations.
//!
//! - [`PgViolationRepository`] - Violation storage, listing and ranking

pub mod pg_violation_repository;

pub use pg_violation_repository::PgViolationRepository;
