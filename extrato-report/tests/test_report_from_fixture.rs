use extrato_core::{InstitutionId, ParserConfig};
use extrato_ingest::extract_direct;
use extrato_report::{handoff_text, summarize, to_json, write_csv};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

fn bb_table() -> extrato_core::ResultTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join("bb_sample.txt");
    let text = std::fs::read_to_string(path).unwrap();
    extract_direct(InstitutionId::BancoDoBrasil, &text, &ParserConfig::with_year(2024))
}

#[test]
fn test_bb_statement_totals() {
    let s = summarize(&bb_table());
    assert_eq!(s.count, 8);
    assert_eq!(s.credits, 4);
    assert_eq!(s.debits, 4);
    // 3.200,00 + 900,00 + 80,00 + 500,00
    assert_eq!(s.total_in, Decimal::from_str("4680.00").unwrap());
    // 150,00 + 15,90 + 245,37 + 12,50
    assert_eq!(s.total_out, Decimal::from_str("423.77").unwrap());
    assert_eq!(s.net, Decimal::from_str("4256.23").unwrap());
}

#[test]
fn test_bb_exports_agree() {
    let table = bb_table();

    let mut csv_out = Vec::new();
    write_csv(&table, &mut csv_out).unwrap();
    let csv_text = String::from_utf8(csv_out).unwrap();
    assert_eq!(csv_text.lines().count(), table.len() + 1);

    let handoff = handoff_text(&table);
    assert_eq!(handoff.lines().count(), table.len());
    assert!(handoff.contains("05/03/2024 | Tarifa Pacote de Serviços | 15,90 | D"));

    let json: serde_json::Value = serde_json::from_str(&to_json(&table).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), table.len());
    assert_eq!(json[0]["date"], "01/03/2024");
}
