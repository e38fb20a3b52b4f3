use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Format a date the way `<input type="date">` expects it (`YYYY-MM-DD`)
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(crate::domain::DATE_FORMAT).to_string()
}

/// Today's date in the local timezone
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Drop every hyphen, leaving other characters untouched
#[must_use]
pub fn strip_hyphens(value: &str) -> String {
    value.chars().filter(|c| *c != '-').collect()
}
