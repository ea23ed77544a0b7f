//! Banco do Nordeste statement parser (text)
//!
//!   04/03/2024 CREDITO PIX
//!   MARIA JOSE SANTOS                   1.000,00 C
//!   05/03/2024 PAGAMENTO DE CONVENIO      -230,00
//!
//! An explicit `C`/`D` after the amount is preferred; a `-` sign is the
//! fallback.

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{LineScan, amount_regex, hint, statement_lines};

static BALANCE_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)detalhamento\s+do\s+saldo").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap());
static FLAGGED_AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"({AMOUNT})\s+([DC])\b"));
static AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"-?\s?{AMOUNT}"));

pub struct BnbExtractor;

impl Extractor for BnbExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Bnb
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let mut scan = LineScan::default();
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) || BALANCE_DETAIL.is_match(line) {
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

            if let Some(caps) = FLAGGED_AMOUNT.captures(rest) {
                let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
                let description = scan.take_description(&rest[..start]);
                let flag = caps[2].to_uppercase();
                out.push(CandidateRecord::new(date, description, &caps[1], flag));
            } else if let Some(m) = AMOUNT.find(rest) {
                let raw = m.as_str().replace(' ', "");
                let description = scan.take_description(&rest[..m.start()]);
                out.push(CandidateRecord::new(
                    date,
                    description,
                    raw.replace('-', ""),
                    hint(raw.contains('-')),
                ));
            } else {
                scan.push_fragment(rest);
            }
        }

        Ok(out)
    }
}
