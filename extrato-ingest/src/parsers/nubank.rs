//! Nubank account statement parser (text)
//!
//! Dates sit on their own line with an abbreviated Portuguese month, and each
//! transaction follows on one or more lines:
//!   04 MAR 2024   Total de entradas   + 1.500,00
//!   Transferência recebida pelo Pix
//!   FULANO DE TAL - •••.123.456-••     1.500,00
//!   Compra no débito   Padaria Real     12,50

use anyhow::Result;
use extrato_core::dates::br_date_text;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise, month_from_abbrev};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{LineScan, amount_regex, hint, statement_lines};

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{2})\s+([A-ZÇ]{3})\s+(\d{4})").unwrap());
static AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"-?\s?R?\$?\s?{AMOUNT}"));

pub struct NubankExtractor;

impl Extractor for NubankExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Nubank
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let mut scan = LineScan::default();
        let mut out = Vec::new();

        for line in statement_lines(text) {
            // date lines are checked before the noise filter: they usually
            // carry a daily total
            if let Some(caps) = DATE.captures(line) {
                let month = month_from_abbrev(&caps[2]).unwrap_or(0);
                scan.set_date(br_date_text(&caps[1], month, &caps[3]));
                continue;
            }
            let Some(date) = scan.date() else {
                continue;
            };
            if is_noise(line) {
                continue;
            }

            let Some(m) = AMOUNT.find(line) else {
                if !line.to_lowercase().starts_with("total") {
                    scan.push_fragment(line);
                }
                continue;
            };

            let raw: String = m
                .as_str()
                .replace("R$", "")
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let inline = collapse_whitespace(&line[..m.start()]);
            let description = if inline.is_empty() { scan.buffered() } else { inline };
            scan.clear_buffer();

            let lower = description.to_lowercase();
            let debit = if lower.contains("recebid") {
                false
            } else {
                lower.contains("enviad") || raw.contains('-')
            };

            if !description.is_empty() {
                out.push(CandidateRecord::new(
                    date,
                    description,
                    raw.replace('-', ""),
                    hint(debit),
                ));
            }
        }

        Ok(out)
    }
}
