//! Itaú statement parser (text)
//!
//! Itaú changed layout over time, so two grammars are tried in order:
//!
//! Current layout, `DD/MM` dates with a trailing `-` on debits:
//!   04/03  PIX TRANSF  ANA PAULA04/03            250,00-
//!          SISPAG FORNECEDORES
//!   05/03  REND PAGO APLIC AUT MAIS              1,37
//!
//! Older layout, one row per line with an abbreviated month:
//!   1 / mai  SAQUE 24H 012345                   -100,00

use anyhow::Result;
use extrato_core::dates::br_date_text;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise, month_from_abbrev};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{LineScan, amount_regex, between, hint, leading_short_date, statement_lines};

static FINAL_BALANCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsaldo\s+final\b").unwrap());
static SDO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsdo\s+(cta|apl|conta)").unwrap());
static TRAILING_SIGN_AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"({AMOUNT})(-?)"));
static MONTH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s*/\s*([a-z]{3})").unwrap());
static SIGNED_AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"-?{AMOUNT}"));

/// Shortest description the current layout accepts.
const MIN_DESCRIPTION_CHARS: usize = 2;

pub struct ItauExtractor {
    fallback_year: i32,
}

impl ItauExtractor {
    pub fn new(fallback_year: i32) -> Self {
        Self { fallback_year }
    }

    /// Current layout: line-buffered, sticky `DD/MM` date, `-` suffix for debits.
    pub fn extract_current(&self, text: &str) -> Vec<CandidateRecord> {
        let mut scan = LineScan::default();
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if line.is_empty() || FINAL_BALANCE.is_match(line) || is_noise(line) {
                continue;
            }

            let mut rest = line;
            if let Some((date, end)) = leading_short_date(line, self.fallback_year) {
                scan.set_date(date);
                rest = line[end..].trim();
            }
            let Some(date) = scan.date() else {
                continue;
            };

            match TRAILING_SIGN_AMOUNT.captures(rest) {
                Some(caps) => {
                    let whole = caps.get(0).map(|m| m.start()).unwrap_or(0);
                    let debit = &caps[2] == "-";
                    let description = scan.take_description(&rest[..whole]);
                    if description.chars().count() >= MIN_DESCRIPTION_CHARS {
                        out.push(CandidateRecord::new(date, description, &caps[1], hint(debit)));
                    }
                }
                None => scan.push_fragment(rest),
            }
        }

        out
    }

    /// Older layout: `D / mmm` date and amount on the same line.
    pub fn extract_legacy(&self, text: &str) -> Vec<CandidateRecord> {
        let year = self.fallback_year.to_string();
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) || SDO.is_match(line) {
                continue;
            }
            let (Some(d), Some(v)) = (MONTH_DATE.captures(line), SIGNED_AMOUNT.find(line)) else {
                continue;
            };
            let Some(date_match) = d.get(0) else {
                continue;
            };

            let month = month_from_abbrev(&d[2]).unwrap_or(0);
            let date = br_date_text(&d[1], month, &year);
            let raw = v.as_str().replace(' ', "");
            let debit = raw.contains('-');
            let description = collapse_whitespace(between(line, date_match.end(), v.start()));

            out.push(CandidateRecord::new(date, description, raw, hint(debit)));
        }

        out
    }
}

impl Extractor for ItauExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Itau
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let current = self.extract_current(text);
        if !current.is_empty() {
            return Ok(current);
        }
        Ok(self.extract_legacy(text))
    }
}
