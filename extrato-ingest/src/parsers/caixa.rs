//! Caixa Econômica Federal statement parser (text)
//!
//! Fixed columns, one transaction per line:
//!   DATA MOV.   NR. DOC.  HISTORICO              VALOR        SALDO
//!   04/03/2024  000123    CRED PIX               1.500,00 C   3.200,00 C
//!   05/03/2024  000124    ENVIO PIX                 85,00 D   3.115,00 C

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{amount_regex, hint, statement_lines};

static ROW: Lazy<Regex> =
    Lazy::new(|| amount_regex(r"(\d{2}/\d{2}/\d{4})\s+\d+\s+(.+?)\s+(-?{AMOUNT})\s+([CD])"));

pub struct CaixaExtractor;

impl Extractor for CaixaExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Caixa
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
            let raw = &caps[3];
            let debit = caps[4].eq_ignore_ascii_case("D") || raw.contains('-');
            out.push(CandidateRecord::new(
                &caps[1],
                collapse_whitespace(&caps[2]),
                raw.replace('-', ""),
                hint(debit),
            ));
        }

        Ok(out)
    }
}
