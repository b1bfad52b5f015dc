//! Locale formatting for composed documents.
//!
//! Currency has no fractional unit: amounts round half away from zero and
//! print with `.` thousands separators, the way vi-VN formats integers.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to the currency's smallest unit.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as "1.234.567".
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a plain quantity in its shortest form ("2", "1.5").
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Format a date as "D/M/YYYY" without zero padding.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
