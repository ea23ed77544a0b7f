use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::amount::format_amount;
use crate::dates::BR_DATE_FORMAT;

/// Whether a transaction increases or decreases the account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "C")]
    Credit,
    #[serde(rename = "D")]
    Debit,
}

impl Direction {
    /// One-letter code used by statements and downstream consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Credit => "C",
            Direction::Debit => "D",
        }
    }

    /// Resolve a raw direction hint. Anything starting with `D` is a debit;
    /// everything else, including an empty hint, is a credit.
    pub fn from_hint(hint: &str) -> Self {
        if hint.trim_start().to_uppercase().starts_with('D') {
            Direction::Debit
        } else {
            Direction::Credit
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unvalidated row produced by an extractor, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub date_text: String,
    pub description: String,
    pub amount_text: String,
    pub direction_hint: String,
}

impl CandidateRecord {
    pub fn new(
        date_text: impl Into<String>,
        description: impl Into<String>,
        amount_text: impl Into<String>,
        direction_hint: impl Into<String>,
    ) -> Self {
        Self {
            date_text: date_text.into(),
            description: description.into(),
            amount_text: amount_text.into(),
            direction_hint: direction_hint.into(),
        }
    }
}

impl From<&Transaction> for CandidateRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            date_text: txn.date.format(BR_DATE_FORMAT).to_string(),
            description: txn.description.clone(),
            amount_text: format_amount(txn.amount),
            direction_hint: txn.direction.code().to_string(),
        }
    }
}

/// A validated statement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(with = "br_date")]
    pub date: NaiveDate,
    pub description: String,
    /// Magnitude only; `direction` carries the sign.
    pub amount: Decimal,
    pub direction: Direction,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.direction == Direction::Debit
    }

    /// Amount with the direction applied (debits negative).
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Credit => self.amount,
            Direction::Debit => -self.amount,
        }
    }
}

mod br_date {
    use super::BR_DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(BR_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, BR_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Rows sorted ascending by date. Same-date rows keep extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<Transaction>,
}

impl ResultTable {
    pub fn new(mut rows: Vec<Transaction>) -> Self {
        // stable: ties keep input order
        rows.sort_by_key(|t| t.date);
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|t| t.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|t| t.date)
    }

    pub fn debit_count(&self) -> usize {
        self.rows.iter().filter(|t| t.is_debit()).count()
    }

    pub fn credit_count(&self) -> usize {
        self.len() - self.debit_count()
    }

    /// Render every row back into candidate shape.
    pub fn to_candidates(&self) -> Vec<CandidateRecord> {
        self.rows.iter().map(CandidateRecord::from).collect()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Which institution's grammar produced, or should process, a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionId {
    BancoDoBrasil,
    Itau,
    Bradesco,
    Santander,
    Caixa,
    Xp,
    Sicoob,
    Bnb,
    Nubank,
    Inter,
    Safra,
    /// Unrecognized institution; served by the generic fallback grammar.
    Generic,
}

impl InstitutionId {
    pub const ALL: [InstitutionId; 12] = [
        InstitutionId::BancoDoBrasil,
        InstitutionId::Itau,
        InstitutionId::Bradesco,
        InstitutionId::Santander,
        InstitutionId::Caixa,
        InstitutionId::Xp,
        InstitutionId::Sicoob,
        InstitutionId::Bnb,
        InstitutionId::Nubank,
        InstitutionId::Inter,
        InstitutionId::Safra,
        InstitutionId::Generic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InstitutionId::BancoDoBrasil => "BANCO DO BRASIL",
            InstitutionId::Itau => "ITAU",
            InstitutionId::Bradesco => "BRADESCO",
            InstitutionId::Santander => "SANTANDER",
            InstitutionId::Caixa => "CAIXA",
            InstitutionId::Xp => "XP INVESTIMENTOS",
            InstitutionId::Sicoob => "SICOOB",
            InstitutionId::Bnb => "BANCO DO NORDESTE",
            InstitutionId::Nubank => "NUBANK",
            InstitutionId::Inter => "INTER",
            InstitutionId::Safra => "SAFRA",
            InstitutionId::Generic => "DESCONHECIDO",
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == InstitutionId::Generic
    }
}

impl fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InstitutionId {
    type Err = String;

    /// Accepts the canonical label or a short alias, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase().replace(['-', '_'], " ");
        let id = match key.as_str() {
            "BANCO DO BRASIL" | "BB" => InstitutionId::BancoDoBrasil,
            "ITAU" | "ITAÚ" => InstitutionId::Itau,
            "BRADESCO" => InstitutionId::Bradesco,
            "SANTANDER" => InstitutionId::Santander,
            "CAIXA" | "CEF" => InstitutionId::Caixa,
            "XP INVESTIMENTOS" | "XP" => InstitutionId::Xp,
            "SICOOB" => InstitutionId::Sicoob,
            "BANCO DO NORDESTE" | "BNB" => InstitutionId::Bnb,
            "NUBANK" => InstitutionId::Nubank,
            "INTER" => InstitutionId::Inter,
            "SAFRA" => InstitutionId::Safra,
            "DESCONHECIDO" | "GENERIC" | "UNKNOWN" => InstitutionId::Generic,
            _ => return Err(format!("unknown institution: {s}")),
        };
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(d: u32, amount: i64, direction: Direction) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            description: format!("row {d}"),
            amount: Decimal::new(amount, 2),
            direction,
        }
    }

    #[test]
    fn test_direction_from_hint() {
        assert_eq!(Direction::from_hint("D"), Direction::Debit);
        assert_eq!(Direction::from_hint("debito"), Direction::Debit);
        assert_eq!(Direction::from_hint("C"), Direction::Credit);
        assert_eq!(Direction::from_hint("X"), Direction::Credit);
    }

    #[test]
    fn test_missing_hint_is_assumed_credit() {
        assert_eq!(Direction::from_hint(""), Direction::Credit);
    }

    #[test]
    fn test_table_sorts_stably() {
        let mut a = txn(5, 100, Direction::Credit);
        a.description = "first".into();
        let mut b = txn(5, 200, Direction::Debit);
        b.description = "second".into();
        let table = ResultTable::new(vec![a, txn(1, 50, Direction::Credit), b]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.first_date(), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(table.rows()[1].description, "first");
        assert_eq!(table.rows()[2].description, "second");
        assert_eq!(table.debit_count(), 1);
        assert_eq!(table.credit_count(), 2);
    }

    #[test]
    fn test_transaction_json_shape() {
        let t = txn(9, 123456, Direction::Debit);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["date"], "09/03/2024");
        assert_eq!(v["amount"], "1234.56");
        assert_eq!(v["direction"], "D");

        let back: Transaction = serde_json::from_value(v).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_candidate_from_transaction() {
        let c = CandidateRecord::from(&txn(2, 123456, Direction::Credit));
        assert_eq!(c.date_text, "02/03/2024");
        assert_eq!(c.amount_text, "1.234,56");
        assert_eq!(c.direction_hint, "C");
    }

    #[test]
    fn test_signed_amount_follows_direction() {
        assert_eq!(txn(1, 1590, Direction::Debit).signed_amount(), Decimal::new(-1590, 2));
        assert_eq!(txn(1, 50000, Direction::Credit).signed_amount(), Decimal::new(50000, 2));
    }

    #[test]
    fn test_only_generic_is_unknown() {
        for id in InstitutionId::ALL {
            assert_eq!(id.is_unknown(), id == InstitutionId::Generic, "{id}");
        }
    }

    #[test]
    fn test_institution_labels_round_trip() {
        for id in InstitutionId::ALL {
            assert_eq!(id.label().parse::<InstitutionId>().unwrap(), id);
        }
        assert_eq!("bb".parse::<InstitutionId>().unwrap(), InstitutionId::BancoDoBrasil);
        assert!("banco imaginario".parse::<InstitutionId>().is_err());
    }
}
