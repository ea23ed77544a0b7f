//! Institution detection by keyword, first match wins.

use extrato_core::InstitutionId;
use tracing::info;

struct DetectRule {
    id: InstitutionId,
    /// At least one must appear (ignored when empty).
    any_of: &'static [&'static str],
    /// All must appear.
    all_of: &'static [&'static str],
}

impl DetectRule {
    fn matches(&self, upper: &str) -> bool {
        (self.any_of.is_empty() || self.any_of.iter().any(|k| upper.contains(k)))
            && self.all_of.iter().all(|k| upper.contains(k))
    }
}

const RULES: &[DetectRule] = &[
    DetectRule { id: InstitutionId::Nubank, any_of: &["NUBANK", "NU PAGAMENTOS"], all_of: &[] },
    DetectRule { id: InstitutionId::BancoDoBrasil, any_of: &["BANCO DO BRASIL"], all_of: &[] },
    DetectRule { id: InstitutionId::Itau, any_of: &["ITAÚ", "ITAU"], all_of: &[] },
    DetectRule { id: InstitutionId::Bradesco, any_of: &["BRADESCO"], all_of: &[] },
    DetectRule { id: InstitutionId::Santander, any_of: &["SANTANDER"], all_of: &[] },
    DetectRule { id: InstitutionId::Caixa, any_of: &["CAIXA"], all_of: &[] },
    DetectRule { id: InstitutionId::Xp, any_of: &[], all_of: &["XP", "INVESTIMENTOS"] },
    DetectRule { id: InstitutionId::Sicoob, any_of: &["SICOOB"], all_of: &[] },
    DetectRule { id: InstitutionId::Bnb, any_of: &["NORDESTE", "BNB"], all_of: &[] },
    DetectRule { id: InstitutionId::Inter, any_of: &[], all_of: &["INTER", "BANCO"] },
    DetectRule { id: InstitutionId::Safra, any_of: &["SAFRA"], all_of: &[] },
];

/// Guess the issuing institution from the statement text. Falls through to
/// [`InstitutionId::Generic`] when no keyword group matches.
pub fn detect(text: &str) -> InstitutionId {
    let upper = text.to_uppercase();
    let id = RULES
        .iter()
        .find(|r| r.matches(&upper))
        .map(|r| r.id)
        .unwrap_or(InstitutionId::Generic);
    info!(institution = %id, "detected institution");
    id
}
