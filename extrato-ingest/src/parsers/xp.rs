//! XP Investimentos account statement parser (text)
//!
//!   04/03/2024  TED RECEBIDA BANCO 341         R$ 10.000,00    R$ 10.000,00
//!   06/03/2024  COMPRA TESOURO IPCA+ 2035      -R$ 5.000,00    R$ 5.000,00

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{amount_regex, hint, statement_lines};

static ROW: Lazy<Regex> =
    Lazy::new(|| amount_regex(r"(\d{2}/\d{2}/\d{4})\s+(.+?)\s+(-?R?\$?\s*{AMOUNT})"));

pub struct XpExtractor;

impl Extractor for XpExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Xp
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
            let raw = caps[3].replace("R$", "");
            out.push(CandidateRecord::new(
                &caps[1],
                collapse_whitespace(&caps[2]),
                raw.replace(['-', ' '], ""),
                hint(raw.contains('-')),
            ));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xp_rows() {
        let text = r#"
Movimentação   Valor   Saldo
04/03/2024  TED RECEBIDA BANCO 341         R$ 10.000,00    R$ 10.000,00
06/03/2024  COMPRA TESOURO IPCA+ 2035      -R$ 5.000,00    R$ 5.000,00
"#;
        let txns = XpExtractor.extract(text).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "TED RECEBIDA BANCO 341");
        assert_eq!(txns[0].amount_text, "10.000,00");
        assert_eq!(txns[0].direction_hint, "C");
        assert_eq!(txns[1].description, "COMPRA TESOURO IPCA+ 2035");
        assert_eq!(txns[1].amount_text, "5.000,00");
        assert_eq!(txns[1].direction_hint, "D");
    }
}
