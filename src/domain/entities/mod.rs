//! Core domain entities.
//!
//! - [`ViolationRecord`] - A normalized incident, as consumed by the postcard pipeline
//! - [`RawViolation`] - A source row before normalization
//! - [`AddressGroup`] - All records for one address
//! - [`Violation`] / [`NewViolation`] - Stored records behind the submission API

pub mod address_group;
pub mod violation;

pub use address_group::AddressGroup;
pub use violation::{NewViolation, RawViolation, Violation, ViolationFlag, ViolationRecord};
