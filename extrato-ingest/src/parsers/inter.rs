//! Banco Inter statement parser (text)
//!
//! Each day opens with a narrative date line; transaction lines print the
//! amount followed by the running balance:
//!   4 de Março de 2024 Saldo do dia: R$ 2.150,00
//!   Pix recebido: "Cp :12345678-Fulano"   R$ 500,00   R$ 2.150,00
//!   Compra no debito: "Mercado"           -R$ 42,90   R$ 2.107,10

use anyhow::Result;
use extrato_core::dates::br_date_text;
use extrato_core::{CandidateRecord, InstitutionId, collapse_whitespace, is_noise, month_from_name};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{amount_regex, hint, statement_lines};

static DAY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s+de\s+([a-zç]+)\s+de\s+(\d{4})\s+Saldo\s+do\s+dia:").unwrap()
});
static AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"-?R?\$?\s?{AMOUNT}"));

pub struct InterExtractor;

impl Extractor for InterExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::Inter
    }

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>> {
        let mut current_date: Option<String> = None;
        let mut out = Vec::new();

        for line in statement_lines(text) {
            if line.is_empty() {
                continue;
            }
            if let Some(caps) = DAY_HEADER.captures(line) {
                let month = month_from_name(&caps[2]).unwrap_or(0);
                current_date = Some(br_date_text(&caps[1], month, &caps[3]));
                continue;
            }
            let Some(date) = current_date.as_deref() else {
                continue;
            };
            if is_noise(line) {
                continue;
            }

            // first amount is the transaction, the rest are running balances
            let values: Vec<_> = AMOUNT.find_iter(line).collect();
            if values.len() < 2 {
                continue;
            }
            let first = values[0];
            let raw: String = first
                .as_str()
                .replace("R$", "")
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let description = line[..first.start()].trim().replace('"', "");
            let description = collapse_whitespace(description.trim().trim_end_matches(':'));

            out.push(CandidateRecord::new(
                date,
                description,
                raw.replace('-', ""),
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
    fn test_parse_inter() {
        let text = r#"
Banco Inter S.A.
4 de Março de 2024 Saldo do dia: R$ 2.150,00
Pix recebido: "Cp :12345678-Fulano"   R$ 500,00   R$ 2.150,00
Compra no debito: "Mercado"           -R$ 42,90   R$ 2.107,10
Linha com um valor só R$ 10,00
12 de abril de 2024 Saldo do dia: R$ 2.000,00
Pagamento efetuado: "Conta de luz"    -R$ 107,10  R$ 2.000,00
"#;
        let txns = InterExtractor.extract(text).unwrap();
        assert_eq!(txns.len(), 3);

        assert_eq!(txns[0].date_text, "04/03/2024");
        assert_eq!(txns[0].description, "Pix recebido: Cp :12345678-Fulano");
        assert_eq!(txns[0].amount_text, "500,00");
        assert_eq!(txns[0].direction_hint, "C");

        assert_eq!(txns[1].description, "Compra no debito: Mercado");
        assert_eq!(txns[1].amount_text, "42,90");
        assert_eq!(txns[1].direction_hint, "D");

        assert_eq!(txns[2].date_text, "12/04/2024");
        assert_eq!(txns[2].direction_hint, "D");
    }
}
