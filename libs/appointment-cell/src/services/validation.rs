// libs/appointment-cell/src/services/validation.rs
use chrono::NaiveDate;
use regex::Regex;

/// Shape check only; calendar validity is a separate step so the two
/// failures report distinct messages.
pub fn is_valid_date_shape(date: &str) -> bool {
    let date_regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    date_regex.is_match(date)
}

pub fn is_valid_time_shape(time: &str) -> bool {
    let time_regex = Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap();
    time_regex.is_match(time)
}

pub fn parse_calendar_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
