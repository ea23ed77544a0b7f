//! Banco do Brasil statement parser (text)
//!
//! Expected extracted-text rows:
//!   02/03/2024 Pix - Enviado
//!   Maria Souza                                    150,00 D
//!   05/03/2024 Tarifa Pacote de Serviços            15,90D
//!
//! Descriptions may span lines; the date is sticky until the next date token.

use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId, is_noise};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::Extractor;
use crate::scan::{LineScan, amount_regex, hint, statement_lines};

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap());
static AMOUNT: Lazy<Regex> = Lazy::new(|| amount_regex(r"-?\s?{AMOUNT}"));
// letter glued to or right after the amount: "15,90D", "15,90 D"
static FLAG_AFTER_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([CD])\b").unwrap());
static FLAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([CD])\b").unwrap());

pub struct BancoDoBrasilExtractor;

impl Extractor for BancoDoBrasilExtractor {
    fn institution(&self) -> InstitutionId {
        InstitutionId::BancoDoBrasil
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

            let Some(m) = AMOUNT.find(rest) else {
                scan.push_fragment(rest);
                continue;
            };

            let raw = m.as_str().replace(' ', "");
            let flag = FLAG_AFTER_AMOUNT
                .captures(&rest[m.end()..])
                .or_else(|| FLAG.captures(rest))
                .map(|c| c[1].to_string());
            let debit = flag.as_deref() == Some("D") || raw.contains('-');
            let description = scan.take_description(&rest[..m.start()]);

            out.push(CandidateRecord::new(date, description, raw, hint(debit)));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_without_marker_is_credit() {
        let txns = BancoDoBrasilExtractor
            .extract("01/03/2024 PAGAMENTO DE BOLETO 1.234,56")
            .unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date_text, "01/03/2024");
        assert_eq!(txns[0].description, "PAGAMENTO DE BOLETO");
        assert_eq!(txns[0].amount_text, "1.234,56");
        assert_eq!(txns[0].direction_hint, "C");
    }

    #[test]
    fn test_letter_glued_to_amount_is_debit() {
        let txns = BancoDoBrasilExtractor
            .extract("02/03/2024 TARIFA MANUTENCAO 15,90D")
            .unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount_text, "15,90");
        assert_eq!(txns[0].direction_hint, "D");
    }

    #[test]
    fn test_multiline_description_and_sticky_date() {
        let text = r#"
Extrato de conta corrente
02/03/2024 Pix - Enviado
Maria Souza                                    150,00 D
Transferência recebida
Joao Lima                                      900,00 C
SALDO ANTERIOR 10.000,00
03/03/2024 Compra com cartão Padaria             -12,50
"#;
        let txns = BancoDoBrasilExtractor.extract(text).unwrap();
        assert_eq!(txns.len(), 3);

        assert_eq!(txns[0].date_text, "02/03/2024");
        assert_eq!(txns[0].description, "Pix - Enviado Maria Souza");
        assert_eq!(txns[0].direction_hint, "D");

        assert_eq!(txns[1].date_text, "02/03/2024");
        assert_eq!(txns[1].description, "Transferência recebida Joao Lima");
        assert_eq!(txns[1].direction_hint, "C");

        assert_eq!(txns[2].date_text, "03/03/2024");
        assert_eq!(txns[2].amount_text, "-12,50");
        assert_eq!(txns[2].direction_hint, "D");
    }

    #[test]
    fn test_lines_before_first_date_are_ignored() {
        let txns = BancoDoBrasilExtractor.extract("ESTORNO 50,00\nqualquer coisa").unwrap();
        assert!(txns.is_empty());
    }
}
