//! DTOs for violation submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewViolation, Violation};

/// A driver's report of one problem pickup.
///
/// Flags default to unset. A missing `date` means today.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitViolationRequest {
    #[validate(length(min = 1, max = 32, message = "House number is required"))]
    pub house_number: String,

    #[validate(length(min = 1, max = 200, message = "Street is required"))]
    pub street: String,

    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub overflow: bool,

    #[serde(default)]
    pub not_out: bool,

    #[serde(default)]
    pub not_at_curb: bool,

    #[validate(length(max = 500))]
    pub details: Option<String>,
}

impl From<SubmitViolationRequest> for NewViolation {
    fn from(req: SubmitViolationRequest) -> Self {
        Self {
            date: req.date,
            house_number: req.house_number,
            street: req.street,
            overflow: req.overflow,
            not_out: req.not_out,
            not_at_curb: req.not_at_curb,
            details: req.details.filter(|d| !d.is_empty()),
        }
    }
}

/// A stored violation.
#[derive(Debug, Serialize)]
pub struct ViolationResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub house_number: String,
    pub street: String,
    pub overflow: bool,
    pub not_out: bool,
    pub not_at_curb: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<Violation> for ViolationResponse {
    fn from(v: Violation) -> Self {
        Self {
            id: v.id,
            date: v.date,
            house_number: v.house_number,
            street: v.street,
            overflow: v.overflow,
            not_out: v.not_out,
            not_at_curb: v.not_at_curb,
            details: v.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_to_unset() {
        let req: SubmitViolationRequest =
            serde_json::from_str(r#"{"house_number":"12","street":"Elm St"}"#).unwrap();

        assert!(req.validate().is_ok());
        assert!(!req.overflow && !req.not_out && !req.not_at_curb);
        assert!(req.date.is_none());
    }

    #[test]
    fn test_empty_street_fails_validation() {
        let req: SubmitViolationRequest =
            serde_json::from_str(r#"{"house_number":"12","street":""}"#).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("street"));
    }

    #[test]
    fn test_empty_details_become_none() {
        let req: SubmitViolationRequest = serde_json::from_str(
            r#"{"house_number":"12","street":"Elm St","date":"2018-01-02","not_out":true,"details":""}"#,
        )
        .unwrap();

        let new_violation = NewViolation::from(req);

        assert_eq!(new_violation.date, NaiveDate::from_ymd_opt(2018, 1, 2));
        assert!(new_violation.not_out);
        assert!(new_violation.details.is_none());
    }
}
