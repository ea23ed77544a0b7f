//! Date utilities: Brazilian `DD/MM/YYYY` dates and Portuguese month names.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// chrono format for the canonical `DD/MM/YYYY` rendering.
pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

static BR_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap());

/// Parse a `DD/MM/YYYY` date. The year must have four digits.
pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
    let caps = BR_DATE.captures(s.trim())?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build `DD/MM/YYYY` text from a day, a month number and a year, zero-padding
/// the day and month. Validation is left to [`parse_br_date`].
pub fn br_date_text(day: &str, month: u32, year: &str) -> String {
    format!("{:0>2}/{:02}/{}", day, month, year)
}

/// Month number for a three-letter Portuguese abbreviation (`jan`..`dez`).
///
/// Accepts the `MÇO` spelling some statements print for March.
pub fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    let m = match abbrev.to_lowercase().as_str() {
        "jan" => 1,
        "fev" => 2,
        "mar" | "mço" => 3,
        "abr" => 4,
        "mai" => 5,
        "jun" => 6,
        "jul" => 7,
        "ago" => 8,
        "set" => 9,
        "out" => 10,
        "nov" => 11,
        "dez" => 12,
        _ => return None,
    };
    Some(m)
}

/// Month number for a full Portuguese month name, with or without the cedilla.
pub fn month_from_name(name: &str) -> Option<u32> {
    let m = match name.to_lowercase().as_str() {
        "janeiro" => 1,
        "fevereiro" => 2,
        "março" | "marco" => 3,
        "abril" => 4,
        "maio" => 5,
        "junho" => 6,
        "julho" => 7,
        "agosto" => 8,
        "setembro" => 9,
        "outubro" => 10,
        "novembro" => 11,
        "dezembro" => 12,
        _ => return None,
    };
    Some(m)
}
