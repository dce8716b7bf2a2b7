//! Domain layer: violation entities, address grouping and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Violation records and address groups
//! - [`aggregation`] - Grouping by address and threshold filtering
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Rendering of groups into postcards lives in [`crate::rendering`].

pub mod aggregation;
pub mod entities;
pub mod repositories;

pub use aggregation::{AddressGroups, DEFAULT_THRESHOLD};
