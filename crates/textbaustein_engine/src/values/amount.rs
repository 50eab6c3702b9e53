/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Currency and percent formatting, German convention.
//!
//! Amounts are major currency units. The upstream application formatted
//! every amount with the de-DE number formatter regardless of document
//! language, and generated templates depend on that, so grouping is fixed:
//! thousands dot, decimal comma, two decimals, symbol suffix.

/// Format an amount as a currency string, e.g. `1.234,56 €`.
///
/// A missing amount formats as zero, not as an empty string: amount
/// tokens always render as a currency value.
pub fn format_amount(value: Option<f64>, currency: &str) -> String {
    format!("{} {}", german_decimal(value.unwrap_or(0.0)), symbol(currency))
}

/// Format a tax rate as a percent string, e.g. `19 %` or `7,7 %`.
///
/// A missing rate resolves to an empty string; rates, unlike amounts,
/// have no meaningful zero default.
pub fn format_percent(rate: Option<f64>) -> String {
    let Some(rate) = rate else {
        return String::new();
    };
    if rate.fract().abs() < f64::EPSILON {
        format!("{} %", rate.trunc() as i64)
    } else {
        let text = format!("{:.2}", rate);
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        format!("{} %", trimmed.replace('.', ","))
    }
}

fn symbol(currency: &str) -> String {
    match currency.trim().to_ascii_uppercase().as_str() {
        "" | "EUR" => "€".to_string(),
        "USD" => "$".to_string(),
        "GBP" => "£".to_string(),
        "CHF" => "CHF".to_string(),
        other => other.to_string(),
    }
}

fn german_decimal(value: f64) -> String {
    let negative = value < 0.0;
    // Round to cents first so 1234.005 does not truncate.
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, grouped, fraction)
}
