//! Raw form values as the UI layer hands them over.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::field::{Field, SpaceType};
use super::reservation::ReservationRequest;
use crate::error::{FieldError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Untrusted field values, one string per input control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationForm {
    pub name: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub space_type: String,
    pub guest_count: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub duration: String,
    pub purpose: Option<String>,
    pub requests: Option<String>,
}

impl ReservationForm {
    /// Raw value of a field; absent optional fields read as empty
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Department => &self.department,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::SpaceType => &self.space_type,
            Field::GuestCount => &self.guest_count,
            Field::ReservationDate => &self.reservation_date,
            Field::ReservationTime => &self.reservation_time,
            Field::Duration => &self.duration,
            Field::Purpose => self.purpose.as_deref().unwrap_or(""),
            Field::Requests => self.requests.as_deref().unwrap_or(""),
        }
    }

    /// # Errors
    ///
    /// Returns error if the value is not one of the known space types
    pub fn space_type(&self) -> Result<SpaceType, FieldError> {
        self.space_type.parse()
    }

    /// Guest count, checked against the range of `space`.
    /// A value that is not a whole number is reported as out of range.
    ///
    /// # Errors
    ///
    /// Returns error if the count does not parse or falls outside the range
    pub fn guest_count(&self, space: SpaceType) -> Result<u32, FieldError> {
        let range = space.guest_range();
        let out_of_range = || FieldError::GuestCountOutOfRange {
            space,
            min: range.min,
            max: range.max,
        };

        let count: u32 = self.guest_count.trim().parse().map_err(|_| out_of_range())?;
        if range.contains(count) {
            Ok(count)
        } else {
            Err(out_of_range())
        }
    }

    /// Guest-count placeholder for the space currently selected
    #[must_use]
    pub fn guest_placeholder(&self) -> Option<String> {
        self.space_type().ok().map(|space| space.guest_placeholder())
    }

    /// # Errors
    ///
    /// Returns error if the value is not a `YYYY-MM-DD` date
    pub fn reservation_date(&self) -> Result<NaiveDate, FieldError> {
        let raw = self.reservation_date.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| FieldError::InvalidDate(raw.to_string()))
    }

    /// Build the typed request, stamping it with `now`.
    ///
    /// # Errors
    ///
    /// Returns error if space type, guest count or date cannot be parsed
    pub fn collect(&self, now: DateTime<Utc>) -> Result<ReservationRequest> {
        let space_type = self.space_type()?;
        let guest_count = self.guest_count(space_type)?;
        let reservation_date = self.reservation_date()?;

        Ok(ReservationRequest {
            name: self.name.clone(),
            department: self.department.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            space_type,
            guest_count,
            reservation_date,
            reservation_time: self.reservation_time.clone(),
            duration: self.duration.clone(),
            purpose: self.purpose.clone().filter(|p| !p.is_empty()),
            requests: self.requests.clone().filter(|r| !r.is_empty()),
            submitted_at: now,
        })
    }
}
