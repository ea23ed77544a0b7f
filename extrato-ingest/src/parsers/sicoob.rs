//! Sicoob statement parser (text)
//!
//!   04/03  PIX RECEB.OUTRA IF  JOAO          350,00C
//!   05/03  DEB.PACOTE SERVICOS               29,90D

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{amount_regex, between, hint, leading_short_date, statement_lines};

static FLAGGED_AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"(-?{AMOUNT})\s*([CD])"));

pub struct SicoobExtractor {
    fallback_year: i32,
}

impl SicoobExtractor {
    pub fn new(fallback_year: i32) -> Self {
        Self { fallback_year }
    }
}

impl Extractor for SicoobExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Sicoob
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if is_noise(line) {
                continue;
            }
            let Some((date, end)) = leading_short_date(line, self.fallback_year) else {
                continue;
            };
            let Some(caps) = FLAGGED_AMOUNT.captures(line) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };

            let raw = &caps[1];
            let debit = caps[2].eq_ignore_ascii_case("D") || raw.contains('-');
            out.push(CandidateRecord::new(
                date,
                collapse_whitespace(between(line, end, whole.start())),
                raw.replace('-', ""),
                hint(debit),
            ));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sicoob_rows() {
        let text = r#"
04/03  PIX RECEB.OUTRA IF  JOAO          350,00C
05/03  DEB.PACOTE SERVICOS               29,90D
05/03  SEM VALOR
"#;
        let txns = SicoobExtractor::new(2024).extract(text).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date_text, "04/03/2024");
        assert_eq!(txns[0].description, "PIX RECEB.OUTRA IF JOAO");
        assert_eq!(txns[0].direction_hint, "C");
        assert_eq!(txns[1].description, "DEB.PACOTE SERVICOS");
        assert_eq!(txns[1].direction_hint, "D");
    }

    #[test]
    fn test_tarifa_with_glued_flag() {
        let txns = SicoobExtractor::new(2024)
            .extract("02/03/2024 TARIFA MANUTENCAO 15,90D")
            .unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date_text, "02/03/2024");
        assert_eq!(txns[0].description, "TARIFA MANUTENCAO");
        assert_eq!(txns[0].direction_hint, "D");
    }
}
