//! Month-key helpers.
//!
//! A month key is a `YYYY-MM` string used both as selector state and as the
//! prefix that transaction dates are matched against.

use chrono::{Datelike, Local, NaiveDate};

/// Formats the month key for a calendar date.
pub fn month_key_for(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Month key for today, the selector's initial state.
pub fn current_month_key() -> String {
    month_key_for(Local::now().date_naive())
}

/// Month keys for the current and previous `years_back` years, newest first,
/// skipping months after `today`. This is the option list a month picker shows.
pub fn recent_month_keys(today: NaiveDate, years_back: u32) -> Vec<String> {
    let mut keys = Vec::new();
    for year in (today.year() - years_back as i32..=today.year()).rev() {
        for month in (1..=12u32).rev() {
            if year == today.year() && month > today.month() {
                continue;
            }
            keys.push(format!("{year:04}-{month:02}"));
        }
    }
    keys
}
