/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Flexible date parsing, formatting, and calendar derivations.
//!
//! Date fields arrive as German `DD.MM.YYYY` / `DD/MM/YYYY` strings, as
//! ISO-ish strings, or occasionally as something else entirely. The
//! day-first form is parsed from explicit components before any generic
//! parsing runs, so `03.05.2025` is never read as March 5th.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use textbaustein_core::Language;

static DAY_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[./](\d{1,2})[./](\d{4})$").unwrap());

static DAY_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*Tage").unwrap());

/// Default payment window when the terms text yields no usable day count.
pub const DEFAULT_PAYMENT_DAYS: u64 = 14;

/// Parse a date-bearing string, day-first forms before ISO.
///
/// Returns `None` for anything unparseable; the caller decides whether to
/// pass the raw string through.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(caps) = DAY_FIRST.captures(s) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    // ISO date, with or without a time suffix.
    let head = s.split(['T', ' ']).next().unwrap_or(s);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Format a date in the language's calendar format.
pub fn format_date(date: NaiveDate, language: Language) -> String {
    let pattern = match language {
        Language::De => "%d.%m.%Y",
        Language::En | Language::Fr => "%d/%m/%Y",
    };
    date.format(pattern).to_string()
}

/// Resolve a raw date field to display text.
///
/// Parseable input is reformatted; anything else passes through unchanged
/// rather than surfacing an error or an "Invalid Date" literal.
pub fn display_date(raw: &str, language: Language) -> String {
    match parse_flexible(raw) {
        Some(date) => format_date(date, language),
        None => raw.trim().to_string(),
    }
}

/// Extract the payment window in days from free-text payment terms.
///
/// Matches the first "`N` Tage" occurrence; absent or non-positive counts
/// fall back to [`DEFAULT_PAYMENT_DAYS`].
pub fn payment_days(terms: &str) -> u64 {
    DAY_COUNT
        .captures(terms)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_PAYMENT_DAYS)
}

/// Compute a due date from a base date and payment-terms text.
pub fn due_date(base: NaiveDate, terms: &str) -> NaiveDate {
    base.checked_add_days(Days::new(payment_days(terms)))
        .unwrap_or(base)
}

/// Shift a date by whole months, returning `(year, month)`.
///
/// Only the calendar position is needed by the month tokens, so there is
/// no day clamping to worry about.
pub fn shift_month(date: NaiveDate, delta: i32) -> (i32, u32) {
    let zero_based = date.year() * 12 + date.month0() as i32 + delta;
    (zero_based.div_euclid(12), zero_based.rem_euclid(12) as u32 + 1)
}

/// Quarter number (1-4) of a date.
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// The quarter before `q`, wrapping 1 back to 4.
pub fn previous_quarter(q: u32) -> u32 {
    if q <= 1 {
        4
    } else {
        q - 1
    }
}

/// The quarter after `q`, wrapping 4 forward to 1.
pub fn next_quarter(q: u32) -> u32 {
    if q >= 4 {
        1
    } else {
        q + 1
    }
}

/// Number of days in the month of `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = shift_month(date, 1);
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| date.with_day(1).unwrap_or(date));
    first_of_next
        .pred_opt()
        .map(|d| d.day())
        .unwrap_or_else(|| date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_first_parsing() {
        assert_eq!(parse_flexible("03.05.2025"), Some(date(2025, 5, 3)));
        assert_eq!(parse_flexible("03/05/2025"), Some(date(2025, 5, 3)));
        assert_eq!(parse_flexible("3.5.2025"), Some(date(2025, 5, 3)));
    }

    #[test]
    fn test_iso_parsing() {
        assert_eq!(parse_flexible("2025-05-03"), Some(date(2025, 5, 3)));
        assert_eq!(
            parse_flexible("2025-05-03T10:30:00Z"),
            Some(date(2025, 5, 3))
        );
        assert_eq!(parse_flexible("2025-05-03 10:30:00"), Some(date(2025, 5, 3)));
    }

    #[test]
    fn test_unparseable_input() {
        assert_eq!(parse_flexible("not-a-date"), None);
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("32.13.2025"), None);
    }

    #[test]
    fn test_display_date_passthrough() {
        assert_eq!(display_date("not-a-date", Language::De), "not-a-date");
        assert_eq!(display_date("03.05.2025", Language::De), "03.05.2025");
        assert_eq!(display_date("2025-05-03", Language::De), "03.05.2025");
        assert_eq!(display_date("2025-05-03", Language::En), "03/05/2025");
    }

    #[test]
    fn test_day_first_is_not_month_first() {
        // Guards against locale-ambiguous parsing.
        assert_eq!(display_date("03.05.2025", Language::De), "03.05.2025");
        assert_ne!(display_date("03.05.2025", Language::De), "05.03.2025");
    }

    #[test]
    fn test_payment_days_extraction() {
        assert_eq!(payment_days("Zahlbar binnen 14 Tagen ohne Abzug"), 14);
        assert_eq!(payment_days("30 Tage netto"), 30);
        assert_eq!(payment_days("sofort fällig"), DEFAULT_PAYMENT_DAYS);
        assert_eq!(payment_days(""), DEFAULT_PAYMENT_DAYS);
        assert_eq!(payment_days("0 Tage"), DEFAULT_PAYMENT_DAYS);
    }

    #[test]
    fn test_due_date() {
        assert_eq!(
            due_date(date(2025, 1, 1), "Zahlbar binnen 14 Tagen ohne Abzug"),
            date(2025, 1, 15)
        );
        assert_eq!(due_date(date(2025, 1, 1), ""), date(2025, 1, 15));
    }

    #[test]
    fn test_shift_month_wraps_year() {
        assert_eq!(shift_month(date(2025, 1, 15), -1), (2024, 12));
        assert_eq!(shift_month(date(2025, 12, 15), 1), (2026, 1));
        assert_eq!(shift_month(date(2025, 6, 15), 1), (2025, 7));
    }

    #[test]
    fn test_quarter_math() {
        assert_eq!(quarter(date(2025, 1, 1)), 1);
        assert_eq!(quarter(date(2025, 12, 31)), 4);
        assert_eq!(previous_quarter(1), 4);
        assert_eq!(next_quarter(4), 1);
        assert_eq!(next_quarter(2), 3);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2025, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2025, 12, 1)), 31);
    }
}
