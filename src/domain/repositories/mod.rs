//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod violation_repository;

pub use violation_repository::{Offender, ViolationRepository};

#[cfg(test)]
pub use violation_repository::MockViolationRepository;
