//! # Curbside Postcards
//!
//! Printable LaTeX postcards for residents whose address keeps turning up in
//! the curbside waste-collection violation log, plus a small HTTP service for
//! logging violations and ranking repeat offenders.
//!
//! ## Pipeline
//!
//! ```text
//! CSV file / violations table
//!     → ViolationRecord         (infrastructure::csv_source, PgViolationRepository)
//!     → AddressGroups           (domain::aggregation, threshold filter)
//!     → Summary × 2 + templates (rendering::summary, rendering::template)
//!     → DocumentWriter          (rendering::card)
//! ```
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Violation entities, grouping and repository traits
//! - **Rendering** ([`rendering`]) - Summaries, placeholder substitution and card templates
//! - **Application Layer** ([`application`]) - Services used by handlers and the CLI
//! - **Infrastructure Layer** ([`infrastructure`]) - CSV source and PostgreSQL repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Binaries
//!
//! - `curbside-postcards` - the HTTP service (configured via [`config::Config`])
//! - `postcards` - the batch generator (`from-csv`, `from-db`, `sample`)

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod rendering;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{PostcardBatch, PostcardService, ViolationService};
    pub use crate::domain::entities::{AddressGroup, NewViolation, Violation, ViolationRecord};
    pub use crate::domain::{AddressGroups, DEFAULT_THRESHOLD};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
