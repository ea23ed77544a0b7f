//! Santander statement parser (text)
//!
//! Current layout, one row per line with a document number column:
//!   04/03/2024  PIX RECEBIDO FULANO DE TAL   000123   1.250,00
//!   05/03/2024  COMPRA CARTAO DEB MC         000456   -89,90
//!
//! Older layout, sticky `DD/MM` date, every amount on the line printed, debit
//! rows ending in `-`:
//!   04/03 PAGAMENTO CARTAO CREDITO 0012345   1.000,00-   5.000,00

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{LineScan, amount_regex, hint, leading_short_date, statement_lines};

static ROW: Lazy<Regex> =
    Lazy::new(|| amount_regex(r"(\d{2}/\d{2}/\d{4})\s+(.+?)\s+\d+\s+(-?{AMOUNT})"));
static AMOUNTS: Lazy<Regex> = Lazy::new(|| amount_regex(r"({AMOUNT})\s*-?"));
static LONG_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{5,}\b").unwrap());

/// Shortest description the older layout accepts.
const MIN_DESCRIPTION_CHARS: usize = 3;

pub struct SantanderExtractor {
    fallback_year: i32,
}

impl SantanderExtractor {
    pub fn new(fallback_year: i32) -> Self {
        Self { fallback_year }
    }

    pub fn extract_current(&self, text: &str) -> Vec<CandidateRecord> {
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) {
                continue;
            }
            let Some(caps) = ROW.captures(line) else {
                continue;
            };
            let raw = &caps[3];
            out.push(CandidateRecord::new(
                &caps[1],
                collapse_whitespace(&caps[2]),
                raw.replace('-', ""),
                hint(raw.contains('-')),
            ));
        }

        out
    }

    pub fn extract_legacy(&self, text: &str) -> Vec<CandidateRecord> {
        let mut scan = LineScan::default();
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) {
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

            let values: Vec<&str> = AMOUNTS
                .captures_iter(rest)
                .filter_map(|c| c.get(1).map(|m| m.as_str()))
                .collect();
            let Some(first) = values.first() else {
                continue;
            };

            let mut description = rest.to_string();
            for v in &values {
                description = description.replace(v, "");
            }
            let description = description.replace('-', "");
            let description = collapse_whitespace(&LONG_NUMBER.replace_all(&description, ""));
            let debit = rest.trim_end().ends_with('-');

            if description.chars().count() >= MIN_DESCRIPTION_CHARS {
                out.push(CandidateRecord::new(date, description, *first, hint(debit)));
            }
        }

        out
    }
}

impl Extractor for SantanderExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Santander
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let current = self.extract_current(text);
        if !current.is_empty() {
            return Ok(current);
        }
        Ok(self.extract_legacy(text))
    }
}
