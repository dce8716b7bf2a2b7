//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`csv_source`] - Violation records from CSV exports
//! - [`persistence`] - PostgreSQL repository implementations

pub mod csv_source;
pub mod persistence;
