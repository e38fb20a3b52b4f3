use serde::{Deserialize, Serialize};

use crate::domain::Field;
use crate::error::{FieldError, ReservationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_field: Option<Field>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            failed_field: None,
            message: None,
        }
    }

    pub fn invalid(error: &FieldError) -> Self {
        Self {
            valid: false,
            failed_field: Some(error.field()),
            message: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub succeeded: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
}

impl SubmissionOutcome {
    pub fn success() -> Self {
        Self {
            succeeded: true,
            error_reason: None,
        }
    }

    pub fn failure(error: &ReservationError) -> Self {
        Self {
            succeeded: false,
            error_reason: Some(error.to_string()),
        }
    }
}
