//! Display formatting for months and amounts.

use crate::calc::month::parse_month;

/// Formats `2025-01` as `Jan 2025`; malformed tokens are returned unchanged.
pub fn format_month(month: &str) -> String {
    match parse_month(month) {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => month.to_string(),
    }
}

/// Formats an amount as whole US dollars, e.g. `-$1,234`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
