//! Banco Safra statement parser (text)
//!
//! Most rows fit on one line:
//!   04/03 PIX RECEBIDO FULANO 123456789       1.000,00
//!   05/03 TARIFA PACOTE                          -39,90
//! Longer ones wrap, with the amount (and an optional trailing `-`) at the end
//! of the last physical line:
//!   06/03 TED ENVIADA
//!   FORNECEDOR ABC LTDA-123456              2.000,00 -
//! Summary rows listing three or more `R$` amounts are skipped.

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{LineScan, amount_regex, hint, leading_short_date, statement_lines};

static CURRENCY_AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"R\$\s*{AMOUNT}"));
static ONE_LINE_ROW: Lazy<Regex> =
    Lazy::new(|| amount_regex(r"^(\d{2}/\d{2})\s+(.+?)\s+(-?{AMOUNT})\s*$"));
static TRAILING_DOC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\d{6,}\s*$").unwrap());
static TRAILING_AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"({AMOUNT})\s*-?\s*$"));
static DASH_DOC: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d{6}").unwrap());

const MIN_ONE_LINE_DESCRIPTION_CHARS: usize = 4;
const MIN_WRAPPED_DESCRIPTION_CHARS: usize = 3;

pub struct SafraExtractor {
    fallback_year: i32,
}

impl SafraExtractor {
    pub fn new(fallback_year: i32) -> Self {
        Self { fallback_year }
    }
}

impl Extractor for SafraExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Safra
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let mut scan = LineScan::default();
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) || line.starts_with('/') {
                continue;
            }
            if CURRENCY_AMOUNT.find_iter(line).count() >= 3 {
                continue;
            }

            if let Some(caps) = ONE_LINE_ROW.captures(line) {
                let date = format!("{}/{}", &caps[1], self.fallback_year);
                let raw = &caps[3];
                let description = collapse_whitespace(&TRAILING_DOC.replace(caps[2].trim(), ""));
                if description.chars().count() >= MIN_ONE_LINE_DESCRIPTION_CHARS {
                    out.push(CandidateRecord::new(
                        date,
                        description,
                        raw.replace('-', ""),
                        hint(raw.contains('-')),
                    ));
                }
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

            match TRAILING_AMOUNT.captures(rest) {
                Some(caps) => {
                    let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
                    let debit = rest[start..].contains('-');
                    let description = scan.take_description(&rest[..start]);
                    let description = collapse_whitespace(&DASH_DOC.replace_all(&description, ""));
                    if description.chars().count() >= MIN_WRAPPED_DESCRIPTION_CHARS {
                        out.push(CandidateRecord::new(date, description, &caps[1], hint(debit)));
                    }
                }
                None => scan.push_fragment(rest),
            }
        }

        Ok(out)
    }
}
