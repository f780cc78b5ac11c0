//! Date parsing and display for the booking form.

use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

/// Value format of `<input type="date">`.
const INPUT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
/// `Oct 05, 2026`
const SHORT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day], [year]");

#[derive(Debug, thiserror::Error)]
pub enum DateInputError {
    #[error("invalid date {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error(transparent)]
    Format(#[from] time::error::Format),
}

/// Parses the value of a date input. An empty value clears the date.
pub fn parse_input(value: &str) -> Result<Option<Date>, DateInputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse(trimmed, INPUT_FORMAT)
        .map(Some)
        .map_err(|source| DateInputError::Parse {
            input: trimmed.to_string(),
            source,
        })
}

/// Value to feed back into a date input.
pub fn input_value(date: Option<Date>) -> String {
    date.and_then(|date| date.format(INPUT_FORMAT).ok())
        .unwrap_or_default()
}

pub fn format_short(date: Date) -> Result<String, DateInputError> {
    Ok(date.format(SHORT_FORMAT)?)
}

/// `October 5th, 2026`
pub fn format_long(date: Date) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.month(),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

/// Short form, or `fallback` when the date is missing or cannot be formatted.
pub fn short_or(date: Option<Date>, fallback: &str) -> String {
    date.and_then(|date| format_short(date).ok())
        .unwrap_or_else(|| fallback.to_string())
}

fn ordinal_suffix(day: u8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parses_date_input_values() {
        assert_eq!(parse_input("2026-10-19").unwrap(), Some(date!(2026 - 10 - 19)));
        assert_eq!(parse_input("  ").unwrap(), None);
        assert!(matches!(
            parse_input("19/10/2026"),
            Err(DateInputError::Parse { .. })
        ));
    }

    #[test]
    fn input_value_round_trips() {
        let day = date!(2026 - 02 - 03);
        assert_eq!(input_value(Some(day)), "2026-02-03");
        assert_eq!(input_value(None), "");
    }

    #[test]
    fn short_format_pads_day() {
        assert_eq!(format_short(date!(2026 - 10 - 05)).unwrap(), "Oct 05, 2026");
        assert_eq!(short_or(None, "N/A"), "N/A");
    }

    #[test]
    fn long_format_uses_ordinals() {
        assert_eq!(format_long(date!(2026 - 10 - 01)), "October 1st, 2026");
        assert_eq!(format_long(date!(2026 - 10 - 02)), "October 2nd, 2026");
        assert_eq!(format_long(date!(2026 - 10 - 13)), "October 13th, 2026");
        assert_eq!(format_long(date!(2026 - 10 - 23)), "October 23rd, 2026");
        assert_eq!(format_long(date!(2026 - 10 - 11)), "October 11th, 2026");
    }
}
