//! Structural-noise classifier for statement lines.
//!
//! Statements interleave transactions with running balances, headers, column
//! titles and footers. A line is noise when it matches a junk rule, unless a
//! preserve rule matches first: terms like "IOF" or "tarifa" are real
//! transactions even when the line also looks like a header.

use once_cell::sync::Lazy;
use regex::Regex;

/// One entry of the static rule table.
pub struct NoiseRule {
    pub pattern: Regex,
    /// A match only counts when the text right after it does NOT match this.
    pub not_followed_by: Option<Regex>,
    /// Preserve rules mark a line as content and win over junk rules.
    pub preserve: bool,
}

impl NoiseRule {
    fn junk(pattern: &str) -> Self {
        Self::build(pattern, None, false)
    }

    fn keep(pattern: &str) -> Self {
        Self::build(pattern, None, true)
    }

    fn build(pattern: &str, not_followed_by: Option<&str>, preserve: bool) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){pattern}")).unwrap(),
            not_followed_by: not_followed_by.map(|p| Regex::new(&format!("(?i)^{p}")).unwrap()),
            preserve,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        match &self.not_followed_by {
            None => self.pattern.is_match(text),
            Some(guard) => self
                .pattern
                .find_iter(text)
                .any(|m| !guard.is_match(&text[m.end()..])),
        }
    }
}

/// Why a line was (or was not) classified as noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Preserved,
    Noise,
    Content,
}

impl LineClass {
    pub fn is_noise(&self) -> bool {
        matches!(self, LineClass::Blank | LineClass::Noise)
    }
}

pub static RULES: Lazy<Vec<NoiseRule>> = Lazy::new(|| {
    vec![
        // --- preserve ---
        NoiseRule::keep(r"\biof\b"),
        NoiseRule::build(r"\bjuros\b", Some(r"\s+morat"), true),
        NoiseRule::keep(r"\btarifa\b"),
        NoiseRule::keep(r"\bencargos\b"),
        NoiseRule::keep(r"\btributo\b"),
        NoiseRule::keep(r"\bimposto\b"),
        NoiseRule::keep(r"\bpagamento\s+(de\s+)?(boleto|conta|fatura|darf|gps)\b"),
        NoiseRule::keep(r"\btransfer[eê]ncia\s+(recebida|enviada|ted|doc)\b"),
        NoiseRule::keep(r"\bpix\s+(recebido|enviado)\b"),
        NoiseRule::keep(r"\bted\s+(recebid|enviad)"),
        NoiseRule::keep(r"\bdoc\s+(recebid|enviad)"),
        NoiseRule::keep(r"\bcheque\s+(compensado|devolvido)\b"),
        NoiseRule::keep(r"\bc[oó]digo\s+\d+"),
        NoiseRule::keep(r"\bd[eé]b(ito)?\.?\s+aut(om[aá]tico|\.)?"),
        // --- junk ---
        NoiseRule::junk(r"\bs\s*a\s*l\s*d\s*o\b"),
        NoiseRule::junk(
            r"\bsaldo\s*(anterior|do\s+dia|total|atual|bloqueado|dispon[ií]vel|parcial|inicial|final|em\s+c/c)\b",
        ),
        NoiseRule::junk(r"\bsaldo\s*\+\s*limite\b"),
        NoiseRule::junk(r"\bsdo\s+(cta|apl|conta)\b"),
        NoiseRule::junk(r"\bdetalhamento\b"),
        NoiseRule::junk(r"\bextrato\b"),
        NoiseRule::junk(r"\bcliente\b"),
        NoiseRule::junk(r"\bconta\s+corrente\s*\|\s*movimenta"),
        NoiseRule::junk(r"\blimite\b"),
        NoiseRule::junk(r"\binvestimentos\b"),
        NoiseRule::junk(r"\bdispon[ií]vel\b"),
        NoiseRule::junk(r"\bbloqueado\b"),
        NoiseRule::junk(r"\btotal\s+(de\s+)?(entradas|sa[ií]das|cr[ée]ditos|d[ée]bitos)\b"),
        NoiseRule::junk(r"\btotal\s+geral\b"),
        NoiseRule::junk(r"\btotal\s+(das|de)\s+opera[cç][oõ]es\b"),
        NoiseRule::junk(r"^total\b.*\d,\d{2}\D+\d[\d.]*,\d{2}"),
        NoiseRule::junk(r"\btotalizador\b"),
        NoiseRule::junk(r"\bresumo\b"),
        NoiseRule::junk(r"\bfale\s*conosco\b"),
        NoiseRule::junk(r"\bouvidoria\b"),
        NoiseRule::junk(r"\bpara\s+demais\s+siglas\b"),
        NoiseRule::junk(r"\bnotas\s+explicativas\b"),
        NoiseRule::junk(r"\baplica[cç][oõ]es\s+autom[aá]ticas\b"),
        NoiseRule::junk(r"\bvalor\s+\(r\$\)"),
        NoiseRule::junk(r"\bvalores\s+em\s+r\$"),
        NoiseRule::junk(r"\bdocumento\b"),
        NoiseRule::junk(r"\bdescri[cç][aã]o\b"),
        NoiseRule::junk(r"\bcr[eé]ditos\b"),
        NoiseRule::junk(r"\bd[eé]bitos\b"),
        NoiseRule::junk(r"\bmovimenta[cç][aã]o\b"),
        NoiseRule::junk(r"\bp[aá]gina\b"),
        NoiseRule::junk(r"\bdata\s+lan[cç]amento\b"),
        NoiseRule::junk(r"\bcomplemento\b"),
        NoiseRule::junk(r"\bcentral\s+de\s+suporte\b"),
        NoiseRule::junk(r"\bper[ií]odo\s+de\b"),
        NoiseRule::junk(r"\bcobran[cç]a\s+d[01]\b"),
        NoiseRule::junk(r"\bcheque\s+empresarial\b"),
    ]
});

/// Classify one line of statement text.
pub fn classify(line: &str) -> LineClass {
    let text = line.trim().to_lowercase();
    if text.is_empty() {
        return LineClass::Blank;
    }

    if RULES.iter().any(|r| r.preserve && r.matches(&text)) {
        return LineClass::Preserved;
    }
    if RULES.iter().any(|r| !r.preserve && r.matches(&text)) {
        return LineClass::Noise;
    }
    LineClass::Content
}

/// True for blank lines, balances, headers, totals and footers.
pub fn is_noise(line: &str) -> bool {
    classify(line).is_noise()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_table() {
        let cases: &[(&str, bool)] = &[
            ("", true),
            ("   ", true),
            ("SALDO ANTERIOR 10.000,00", true),
            ("S A L D O  1.234,56", true),
            ("Saldo disponível 3.210,00", true),
            ("Saldo + Limite 5.000,00", true),
            ("SDO CTA/APL 1.000,00", true),
            ("Extrato de conta corrente", true),
            ("Data Lançamento Histórico Documento Valor", true),
            ("Página 2 de 4", true),
            ("Total de Créditos 4.500,00", true),
            ("TOTAL GERAL 12.000,00", true),
            ("Total das operações 800,00", true),
            ("Total 1.500,00 2.300,00", true),
            ("Ouvidoria: 0800 000 0000", true),
            ("Notas explicativas", true),
            ("PIX TRANSF JOAO SILVA 150,00", false),
            ("COMPRA CARTAO MERCADO 89,90 D", false),
            ("01/03/2024 PAGAMENTO DE BOLETO 1.234,56", false),
        ];
        for (line, expected) in cases {
            assert_eq!(is_noise(line), *expected, "line {line:?}");
        }
    }

    #[test]
    fn test_exceptions_win_over_junk() {
        // each line also matches a junk rule
        let lines = [
            "IOF sobre saldo devedor 1,23",
            "Tarifa extrato mensal 12,00",
            "Juros saldo devedor 45,00",
            "Código 4521 PIX RECEBIDO 500,00",
            "Pagamento de fatura - cliente 300,00",
            "Débito automático documento 77,00",
        ];
        for line in lines {
            assert_eq!(classify(line), LineClass::Preserved, "line {line:?}");
            assert!(!is_noise(line));
        }
    }

    #[test]
    fn test_juros_moratorios_not_preserved() {
        assert!(is_noise("Juros moratórios sobre saldo 3,00"));
        assert_eq!(classify("juros de mora 3,00"), LineClass::Preserved);
    }

    #[test]
    fn test_pix_received_with_code_is_content() {
        assert!(!is_noise("Código 4521 PIX RECEBIDO 500,00"));
    }

    #[test]
    fn test_plain_transaction_is_content() {
        assert_eq!(classify("COMPRA CARTAO PADARIA 12,50"), LineClass::Content);
    }
}
