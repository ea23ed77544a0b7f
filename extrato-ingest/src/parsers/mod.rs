//! Per-institution statement grammars and their registration order.

pub mod banco_do_brasil;
pub mod bnb;
pub mod bradesco;
pub mod caixa;
pub mod generic;
pub mod inter;
pub mod itau;
pub mod nubank;
pub mod safra;
pub mod santander;
pub mod sicoob;
pub mod xp;

use extrato_core::{InstitutionId, ParserConfig};

use crate::extractor::Extractor;

/// The extractor serving `id`.
pub fn extractor_for(id: InstitutionId, config: &ParserConfig) -> Box<dyn Extractor> {
    let year = config.fallback_year;
    match id {
        InstitutionId::BancoDoBrasil => Box::new(banco_do_brasil::BancoDoBrasilExtractor),
        InstitutionId::Itau => Box::new(itau::ItauExtractor::new(year)),
        InstitutionId::Bradesco => Box::new(bradesco::BradescoExtractor),
        InstitutionId::Santander => Box::new(santander::SantanderExtractor::new(year)),
        InstitutionId::Caixa => Box::new(caixa::CaixaExtractor),
        InstitutionId::Xp => Box::new(xp::XpExtractor),
        InstitutionId::Sicoob => Box::new(sicoob::SicoobExtractor::new(year)),
        InstitutionId::Bnb => Box::new(bnb::BnbExtractor),
        InstitutionId::Nubank => Box::new(nubank::NubankExtractor),
        InstitutionId::Inter => Box::new(inter::InterExtractor),
        InstitutionId::Safra => Box::new(safra::SafraExtractor::new(year)),
        InstitutionId::Generic => Box::new(generic::GenericExtractor),
    }
}

/// Every extractor, in registration order. Universal mode breaks score ties
/// in favor of the earlier entry; the generic fallback comes last.
pub fn all_extractors(config: &ParserConfig) -> Vec<Box<dyn Extractor>> {
    InstitutionId::ALL
        .iter()
        .map(|id| extractor_for(*id, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_institution_in_order() {
        let cfg = ParserConfig::with_year(2024);
        let ids: Vec<_> = all_extractors(&cfg).iter().map(|e| e.institution()).collect();
        assert_eq!(ids, InstitutionId::ALL.to_vec());
        assert_eq!(ids.last(), Some(&InstitutionId::Generic));
    }

    #[test]
    fn test_descriptions_leave_extractors_collapsed() {
        let text = r#"
04/03/2024  000123    CRED   PIX               1.500,00 C   3.200,00 C
04/03  PIX RECEB.OUTRA IF  JOAO          350,00C
04/03/2024  TED  RECEBIDA   BANCO 341         R$ 10.000,00    R$ 10.000,00
05/03/2024  PIX RECEBIDO   FULANO   000123   1.250,00
1 / mai  SAQUE   24H 012345        -100,00
05/03  TARIFA   PACOTE                          -39,90
4 de Março de 2024 Saldo do dia: R$ 2.150,00
Pix recebido:   "Cp  Fulano"   R$ 500,00   R$ 2.150,00
"#;
        let cfg = ParserConfig::with_year(2024);
        for extractor in all_extractors(&cfg) {
            for c in extractor.extract(text).unwrap() {
                assert!(
                    !c.description.contains("  ") && c.description == c.description.trim(),
                    "{}: {:?}",
                    extractor.institution(),
                    c.description
                );
            }
        }
    }
}
