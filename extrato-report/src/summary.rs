//! Per-statement totals.

use chrono::NaiveDate;
use extrato_core::dates::BR_DATE_FORMAT;
use extrato_core::{Direction, ResultTable, format_amount};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatementSummary {
    pub count: usize,
    pub credits: usize,
    pub debits: usize,
    pub total_in: Decimal,
    pub total_out: Decimal,
    /// `total_in - total_out`, negative when more money left than came in.
    pub net: Decimal,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn summarize(table: &ResultTable) -> StatementSummary {
    let mut summary = StatementSummary {
        count: table.len(),
        first_date: table.first_date(),
        last_date: table.last_date(),
        ..Default::default()
    };

    for txn in table {
        summary.net += txn.signed_amount();
        match txn.direction {
            Direction::Credit => {
                summary.credits += 1;
                summary.total_in += txn.amount;
            }
            Direction::Debit => {
                summary.debits += 1;
                summary.total_out += txn.amount;
            }
        }
    }
    summary
}

impl fmt::Display for StatementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let period = match (self.first_date, self.last_date) {
            (Some(a), Some(b)) => format!("{} a {}", a.format(BR_DATE_FORMAT), b.format(BR_DATE_FORMAT)),
            _ => "-".to_string(),
        };
        let sign = if self.net.is_sign_negative() { "-" } else { "" };
        writeln!(f, "Período:   {period}")?;
        writeln!(f, "Lançamentos: {} ({} C / {} D)", self.count, self.credits, self.debits)?;
        writeln!(f, "Entradas:  {}", format_amount(self.total_in))?;
        writeln!(f, "Saídas:    {}", format_amount(self.total_out))?;
        write!(f, "Saldo:     {sign}{}", format_amount(self.net))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrato_core::{CandidateRecord, normalize};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_summarize() {
        let table = normalize(&[
            CandidateRecord::new("10/03/2024", "PIX RECEBIDO", "1.000,00", "C"),
            CandidateRecord::new("02/03/2024", "TARIFA", "15,90", "D"),
            CandidateRecord::new("20/03/2024", "BOLETO", "1.200,10", "D"),
        ]);
        let s = summarize(&table);

        assert_eq!(s.count, 3);
        assert_eq!(s.credits, 1);
        assert_eq!(s.debits, 2);
        assert_eq!(s.total_in, dec("1000.00"));
        assert_eq!(s.total_out, dec("1216.00"));
        assert_eq!(s.net, dec("-216.00"));
        assert_eq!(s.first_date, NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(s.last_date, NaiveDate::from_ymd_opt(2024, 3, 20));

        let text = s.to_string();
        assert!(text.contains("02/03/2024 a 20/03/2024"), "{text}");
        assert!(text.contains("Saldo:     -216,00"), "{text}");
    }

    #[test]
    fn test_summarize_empty() {
        let s = summarize(&ResultTable::empty());
        assert_eq!(s, StatementSummary::default());
        assert!(s.to_string().contains("Período:   -"));
    }
}
