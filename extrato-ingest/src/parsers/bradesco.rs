//! Bradesco statement parser (text)
//!
//! Expected extracted-text rows:
//!   04/03/2024 TRANSFERENCIA PIX
//!   REM: JOSE CARLOS 04/03            1.200,00
//!   COMPRA ELO DEBITO MERCADO        -87,35
//!
//! Debits carry a leading `-`; there is no C/D column.

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{LineScan, amount_regex, hint, statement_lines};

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap());
static AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"-?\s?{AMOUNT}"));

pub struct BradescoExtractor;

impl Extractor for BradescoExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Bradesco
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let mut scan = LineScan::default();
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) {
                continue;
            }

            let mut rest = line;
            if let Some(m) = DATE.find(line) {
                scan.set_date(m.as_str());
                rest = line[m.end()..].trim();
            }
            let Some(date) = scan.date() else {
                continue;
            };

            match AMOUNT.find(rest) {
                Some(m) => {
                    let raw = m.as_str().replace(' ', "");
                    let debit = raw.contains('-');
                    let description = scan.take_description(&rest[..m.start()]);
                    out.push(CandidateRecord::new(date, description, raw, hint(debit)));
                }
                None => scan.push_fragment(rest),
            }
        }

        Ok(out)
    }
}
