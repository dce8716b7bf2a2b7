//! Query parameters for postcard generation.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PostcardQueryParams {
    /// Addresses need strictly more records than this to get a card.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub threshold: Option<usize>,
}
