//! Date-selection rules - which days a reservation may be made for.

use chrono::{Days, NaiveDate};

use crate::error::FieldError;
use crate::utils::{format_date, is_weekend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePolicy {
    pub min_days_from_today: i64,
    pub max_days_from_today: i64,
}

impl Default for DatePolicy {
    fn default() -> Self {
        Self {
            min_days_from_today: 1,
            max_days_from_today: 30,
        }
    }
}

/// Selectable window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.earliest..=self.latest).contains(&date)
    }

    /// `(min, max)` attribute values for a date input
    pub fn as_input_bounds(&self) -> (String, String) {
        (format_date(self.earliest), format_date(self.latest))
    }
}

fn offset(today: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        today.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(today)
}

impl DatePolicy {
    #[must_use]
    pub fn window(&self, today: NaiveDate) -> DateWindow {
        DateWindow {
            earliest: offset(today, self.min_days_from_today),
            latest: offset(today, self.max_days_from_today),
        }
    }

    /// Check a date picked by the user. Weekends are always closed.
    ///
    /// # Errors
    ///
    /// Returns error if the date is a weekend or outside the window
    pub fn check(&self, date: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
        if is_weekend(date) {
            return Err(FieldError::Weekend);
        }

        let window = self.window(today);
        if !window.contains(date) {
            let (earliest, latest) = window.as_input_bounds();
            return Err(FieldError::DateOutOfRange { earliest, latest });
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

    #[test]
    fn window_spans_tomorrow_to_thirty_days() {
        let window = DatePolicy::default().window(today());
        assert_eq!(
            window.as_input_bounds(),
            ("2026-10-17".to_string(), "2026-11-15".to_string())
        );
    }

    #[test]
    fn weekday_inside_window_is_accepted() {
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(DatePolicy::default().check(monday, today()), Ok(()));
    }

    #[test]
    fn weekend_is_rejected_even_inside_window() {
        let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(DatePolicy::default().check(saturday, today()), Err(FieldError::Weekend));
        assert_eq!(DatePolicy::default().check(sunday, today()), Err(FieldError::Weekend));
    }

    #[test]
    fn today_and_far_future_are_out_of_range() {
        let policy = DatePolicy::default();
        assert!(matches!(
            policy.check(today(), today()),
            Err(FieldError::DateOutOfRange { .. })
        ));
        // Monday 2026-11-16 is day 31
        let late = NaiveDate::from_ymd_opt(2026, 11, 16).unwrap();
        assert!(matches!(
            policy.check(late, today()),
            Err(FieldError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn last_day_of_window_is_inclusive() {
        let policy = DatePolicy {
            min_days_from_today: 1,
            max_days_from_today: 3,
        };
        // Monday 2026-10-19 is day 3
        let last = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(policy.check(last, today()), Ok(()));
    }
}
