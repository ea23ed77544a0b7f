//! Fallback parser for statements from unrecognized institutions.
//!
//! Any line with a full `DD/MM/YYYY` date followed, anywhere later, by an
//! amount token becomes a candidate; debit only when the amount carries `-`.

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{amount_regex, between, hint, statement_lines};

static ROW: Lazy<Regex> = Lazy::new(|| amount_regex(r"(\d{2}/\d{2}/\d{4}).*?(-?\s?{AMOUNT})"));

pub struct GenericExtractor;

impl Extractor for GenericExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Generic
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) {
                continue;
            }
            let Some(caps) = ROW.captures(line) else {
                continue;
            };
            let (Some(date), Some(amount)) = (caps.get(1), caps.get(2)) else {
                continue;
            };

            let raw = amount.as_str();
            out.push(CandidateRecord::new(
                date.as_str(),
                collapse_whitespace(between(line, date.end(), amount.start())),
                raw.replace(['-', ' '], ""),
                hint(raw.contains('-')),
            ));
        }

        Ok(out)
    }
}
