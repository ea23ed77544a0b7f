//! Brazilian monetary strings: `R$ 1.234,56`, `-15,90`, `500,00`.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Amount token as it appears in statement text: thousands groups with `.`,
/// exactly two decimals after `,`.
pub const AMOUNT_TOKEN: &str = r"\d{1,3}(?:\.\d{3})*,\d{2}";

static CANONICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").unwrap());

/// Parse a localized amount into its magnitude.
///
/// Strips a leading `R$`, regular and non-breaking spaces and sign markers,
/// drops `.` thousands separators and turns the `,` decimal separator into
/// `.`. Anything that is not digits with at most two decimals afterwards is
/// rejected. Direction is never read from the sign here.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .replace("R$", "")
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{00A0}' | '-' | '+' | '.'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if !CANONICAL.is_match(&cleaned) {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Render a magnitude the way statements print it (`1.234,56`).
pub fn format_amount(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("{grouped},{frac_part}")
}
