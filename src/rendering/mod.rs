//! Turning address groups into a printable LaTeX postcard document.
//!
//! - [`summary`] - Violation and driver-note summaries with truncation disclaimers
//! - [`template`] - Tolerant `$placeholder` substitution and `#` escaping
//! - [`card`] - Card templates, the card renderer and the document writer

pub mod card;
pub mod summary;
pub mod template;

pub use card::{DocumentWriter, RenderedCard, assemble_document, render_card};
pub use summary::{MAX_DETAILS_PRINTED, MAX_VIOLATIONS_PRINTED, Summary};
