//! CSV and JSON exports of a result table.
//!
//! CSV rows use the statement's own notation:
//!   Data,Histórico,Valor,Tipo
//!   05/03/2024,Tarifa Pacote de Serviços,"15,90",D

use anyhow::{Context, Result};
use extrato_core::dates::BR_DATE_FORMAT;
use extrato_core::{ResultTable, format_amount};
use std::io::Write;

pub const CSV_HEADER: [&str; 4] = ["Data", "Histórico", "Valor", "Tipo"];

/// Write the table as CSV, header first.
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER).context("writing CSV header")?;

    for txn in table {
        let date = txn.date.format(BR_DATE_FORMAT).to_string();
        let amount = format_amount(txn.amount);
        wtr.write_record([
            date.as_str(),
            txn.description.as_str(),
            amount.as_str(),
            txn.direction.code(),
        ])
        .with_context(|| format!("writing CSV row for {date} {}", txn.description))?;
    }

    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

/// Pretty JSON array of `{date, description, amount, direction}`.
pub fn to_json(table: &ResultTable) -> Result<String> {
    serde_json::to_string_pretty(table).context("serializing result table")
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrato_core::{CandidateRecord, normalize};

    fn table() -> ResultTable {
        normalize(&[
            CandidateRecord::new("05/03/2024", "Tarifa Pacote de Serviços", "15,90", "D"),
            CandidateRecord::new("01/03/2024", "Pix recebido", "1.234,56", "C"),
        ])
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&table(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Data,Histórico,Valor,Tipo");
        assert_eq!(lines[1], "01/03/2024,Pix recebido,\"1.234,56\",C");
        assert_eq!(lines[2], "05/03/2024,Tarifa Pacote de Serviços,\"15,90\",D");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_csv_empty_table_has_header_only() {
        let mut out = Vec::new();
        write_csv(&ResultTable::empty(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Data,Histórico,Valor,Tipo\n");
    }

    #[test]
    fn test_to_json_shape() {
        let json = to_json(&table()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["date"], "01/03/2024");
        assert_eq!(rows[0]["description"], "Pix recebido");
        assert_eq!(rows[0]["amount"], "1234.56");
        assert_eq!(rows[0]["direction"], "C");
        assert_eq!(rows[1]["direction"], "D");
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&ResultTable::empty()).unwrap(), "[]");
    }
}
