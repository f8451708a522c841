//! String helpers shared across the app.

use chrono::{DateTime, Utc};

/// Formats the calendar date of `instant` as `DD/MM/YYYY`.
///
/// Fields are read in UTC, so the output is the same for every viewer.
/// Validity is the caller's concern: a `DateTime<Utc>` cannot hold an
/// invalid date, so malformed textual input fails at parse time upstream
/// of this function.
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%d/%m/%Y").to_string()
}

/// Upper-cases the first character of `text` and leaves the rest untouched.
///
/// Empty input stays empty, and a first character with no upper-case form
/// (digits, punctuation) passes through unchanged.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
