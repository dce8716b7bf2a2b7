//! DTOs for the worst-offenders ranking.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::Offender;

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct WorstQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OffenderItem {
    pub address: String,
    pub offences: i64,
}

impl From<Offender> for OffenderItem {
    fn from(o: Offender) -> Self {
        Self {
            address: o.address,
            offences: o.offences,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorstResponse {
    pub items: Vec<OffenderItem>,
}
