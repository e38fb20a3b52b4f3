use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    config::{SubmitterConfig, ValidatorConfig},
    domain::{ReservationForm, ReservationRequest},
    error::{FieldError, Result},
    repositories::http::Transport,
    services::{
        date_policy::{DatePolicy, DateWindow},
        submitter::Submitter,
        validator::Validator,
    },
    status::{SubmissionOutcome, ValidationResult},
    utils,
};

/// What happened to one press of the submit button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "camelCase")]
pub enum ReservationFlow {
    Rejected(ValidationResult),
    Submitted(SubmissionOutcome),
}

/// Dates the picker should offer, counted from today
#[must_use]
pub fn selectable_dates(policy: &DatePolicy) -> DateWindow {
    policy.window(utils::today())
}

/// Check a date at the moment it is picked
///
/// # Errors
///
/// Returns error if the value is not a date, falls on a weekend, or lies
/// outside the bookable window
pub fn check_reservation_date(
    value: &str,
    policy: &DatePolicy,
) -> Result<NaiveDate, FieldError> {
    let raw = value.trim();
    let date = NaiveDate::parse_from_str(raw, crate::domain::DATE_FORMAT)
        .map_err(|_| FieldError::InvalidDate(raw.to_string()))?;
    policy.check(date, utils::today())?;
    Ok(date)
}

/// Validate a filled-in form against today's date
#[must_use]
pub fn validate_form(form: &ReservationForm, config: &ValidatorConfig) -> ValidationResult {
    Validator::new(*config).validate(form, utils::today())
}

/// Turn a validated form into the outbound payload
///
/// # Errors
///
/// Returns error if space type, guest count or date cannot be parsed
pub fn collect_reservation(form: &ReservationForm) -> Result<ReservationRequest> {
    form.collect(Utc::now())
}

/// One-shot submission with a fresh submitter
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built. Transport failures are
/// reported inside the outcome.
pub async fn submit_reservation(
    request: &ReservationRequest,
    config: &SubmitterConfig,
) -> Result<SubmissionOutcome> {
    let submitter = Submitter::new(config.clone())?;
    Ok(submitter.submit(request).await)
}

/// Validate, collect and submit
///
/// # Errors
///
/// Returns error if a form that passed validation still fails to collect
pub async fn process_reservation<T: Transport>(
    form: &ReservationForm,
    validator: &Validator,
    submitter: &Submitter<T>,
) -> Result<ReservationFlow> {
    let result = validator.validate(form, utils::today());
    if !result.valid {
        return Ok(ReservationFlow::Rejected(result));
    }

    let request = collect_reservation(form)?;
    Ok(ReservationFlow::Submitted(submitter.submit(&request).await))
}
