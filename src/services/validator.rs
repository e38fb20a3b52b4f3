//! Form validation - pure checks, first failure wins.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::domain::{Field, ReservationForm};
use crate::error::FieldError;
use crate::status::ValidationResult;
use crate::utils::strip_hyphens;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[0-9]-?[0-9]{3,4}-?[0-9]{4}$").expect("valid phone regex"));

/// `local@domain.tld`, no whitespace and a single `@`
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Korean mobile number, hyphens optional
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&strip_hyphens(phone))
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Run every check and fold the first failure into a result.
    pub fn validate(&self, form: &ReservationForm, today: NaiveDate) -> ValidationResult {
        match self.check(form, today) {
            Ok(()) => ValidationResult::valid(),
            Err(e) => {
                debug!(field = %e.field(), reason = %e, "reservation form rejected");
                ValidationResult::invalid(&e)
            }
        }
    }

    /// # Errors
    ///
    /// Returns the first failing check, in form order
    pub fn check(&self, form: &ReservationForm, today: NaiveDate) -> Result<(), FieldError> {
        if let Some(field) = Field::REQUIRED
            .into_iter()
            .find(|f| form.value(*f).trim().is_empty())
        {
            return Err(FieldError::Required(field));
        }

        if !is_valid_email(&form.email) {
            return Err(FieldError::InvalidEmail);
        }

        if !is_valid_phone(&form.phone) {
            return Err(FieldError::InvalidPhone);
        }

        let space = form.space_type()?;
        form.guest_count(space)?;

        let date = form.reservation_date()?;
        if self.config.enforce_date_policy {
            self.config.date_policy.check(date, today)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Friday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn form() -> ReservationForm {
        ReservationForm {
            name: "Park Seo".into(),
            department: "Design".into(),
            email: "seo@corp.example".into(),
            phone: "010-1234-5678".into(),
            space_type: "meeting".into(),
            guest_count: "6".into(),
            reservation_date: "2026-10-20".into(),
            reservation_time: "15:00".into(),
            duration: "2".into(),
            purpose: None,
            requests: None,
        }
    }

    fn check(form: &ReservationForm) -> Result<(), FieldError> {
        Validator::default().check(form, today())
    }

    #[test]
    fn complete_form_passes() {
        let result = Validator::default().validate(&form(), today());
        assert!(result.valid);
        assert_eq!(result.failed_field, None);
        assert_eq!(result.message, None);
    }

    #[test]
    fn every_blank_required_field_is_named() {
        for field in Field::REQUIRED {
            for blank in ["", "   ", "\t\n"] {
                let mut f = form();
                set(&mut f, field, blank);
                let result = Validator::default().validate(&f, today());
                assert!(!result.valid, "{field} = {blank:?} should fail");
                assert_eq!(result.failed_field, Some(field));
                assert_eq!(result.message.as_deref(), Some("this field is required"));
            }
        }
    }

    #[test]
    fn first_blank_field_wins() {
        let mut f = form();
        f.phone.clear();
        f.name.clear();
        assert_eq!(check(&f), Err(FieldError::Required(Field::Name)));
    }

    #[test]
    fn optional_fields_may_be_blank() {
        let mut f = form();
        f.purpose = Some("  ".into());
        f.requests = Some(String::new());
        assert_eq!(check(&f), Ok(()));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.co"));

        let mut f = form();
        f.email = "a@b".into();
        assert_eq!(check(&f), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("010-1234-5678"));
        assert!(is_valid_phone("01012345678"));
        assert!(is_valid_phone("011-123-4567"));
        assert!(!is_valid_phone("02-1234-5678"));
        assert!(!is_valid_phone("010-12-5678"));
        assert!(!is_valid_phone("010 1234 5678"));

        let mut f = form();
        f.phone = "02-1234-5678".into();
        assert_eq!(check(&f), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn guest_count_bounds_per_space() {
        let cases = [
            ("meeting", "6", true),
            ("meeting", "7", false),
            ("meeting", "0", false),
            ("party", "15", true),
            ("party", "16", false),
            ("other", "15", true),
            ("other", "16", false),
        ];
        for (space, count, ok) in cases {
            let mut f = form();
            f.space_type = space.into();
            f.guest_count = count.into();
            let result = Validator::default().validate(&f, today());
            assert_eq!(result.valid, ok, "{space} with {count}");
            if !ok {
                assert_eq!(result.failed_field, Some(Field::GuestCount));
            }
        }
    }

    #[test]
    fn unknown_space_type_is_rejected() {
        let mut f = form();
        f.space_type = "rooftop".into();
        let result = Validator::default().validate(&f, today());
        assert_eq!(result.failed_field, Some(Field::SpaceType));
    }

    #[test]
    fn weekend_is_rechecked_at_submit() {
        let mut f = form();
        f.reservation_date = "2026-10-17".into();
        assert_eq!(check(&f), Err(FieldError::Weekend));

        let lenient = Validator::new(ValidatorConfig {
            enforce_date_policy: false,
            ..ValidatorConfig::default()
        });
        assert_eq!(lenient.check(&f, today()), Ok(()));
    }

    #[test]
    fn garbled_date_is_rejected_without_date_policy() {
        let lenient = Validator::new(ValidatorConfig {
            enforce_date_policy: false,
            ..ValidatorConfig::default()
        });
        let mut f = form();
        f.reservation_date = "next tuesday".into();

        let result = lenient.validate(&f, today());
        assert!(!result.valid);
        assert_eq!(result.failed_field, Some(Field::ReservationDate));
    }

    #[test]
    fn garbled_date_is_rejected() {
        let mut f = form();
        f.reservation_date = "next tuesday".into();
        let result = Validator::default().validate(&f, today());
        assert_eq!(result.failed_field, Some(Field::ReservationDate));
    }

    fn set(form: &mut ReservationForm, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut form.name,
            Field::Department => &mut form.department,
            Field::Email => &mut form.email,
            Field::Phone => &mut form.phone,
            Field::SpaceType => &mut form.space_type,
            Field::GuestCount => &mut form.guest_count,
            Field::ReservationDate => &mut form.reservation_date,
            Field::ReservationTime => &mut form.reservation_time,
            Field::Duration => &mut form.duration,
            Field::Purpose | Field::Requests => unreachable!("optional field"),
        };
        *slot = value.to_string();
    }
}
