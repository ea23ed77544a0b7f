//! Heuristic quality score for a result table.
//!
//! Only meaningful when comparing tables produced from the same text by
//! different extractors.
//!
//! Terms:
//! - volume: 10 per row
//! - span: 5 per calendar day covered (first and last day included)
//! - variance: sample variance of amounts, damped by [`VARIANCE_DAMPING`]
//! - balance: up to 50 for an even debit/credit mix, 0 for a one-sided table

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::types::ResultTable;

pub const ROW_WEIGHT: f64 = 10.0;
pub const SPAN_DAY_WEIGHT: f64 = 5.0;
pub const VARIANCE_DAMPING: f64 = 1e-6;
pub const BALANCE_WEIGHT: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub volume: f64,
    pub span: f64,
    pub variance: f64,
    pub balance: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.volume + self.span + self.variance + self.balance
    }
}

pub fn breakdown(table: &ResultTable) -> ScoreBreakdown {
    let n = table.len();
    let (Some(first), Some(last)) = (table.first_date(), table.last_date()) else {
        return ScoreBreakdown::default();
    };

    let volume = n as f64 * ROW_WEIGHT;

    // rows are date-sorted, so first/last are min/max
    let span_days = (last - first).num_days() + 1;
    let span = span_days as f64 * SPAN_DAY_WEIGHT;

    let variance = if n >= 2 {
        let amounts: Vec<f64> = table.iter().filter_map(|t| t.amount.to_f64()).collect();
        sample_variance(&amounts) * VARIANCE_DAMPING
    } else {
        0.0
    };

    let debit_share = table.debit_count() as f64 / n as f64;
    let credit_share = table.credit_count() as f64 / n as f64;
    let balance = (1.0 - (debit_share - credit_share).abs()) * BALANCE_WEIGHT;

    ScoreBreakdown {
        volume,
        span,
        variance,
        balance,
    }
}

/// Score a table. Empty tables score 0.
pub fn score(table: &ResultTable) -> f64 {
    breakdown(table).total()
}

fn sample_variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let mean = xs.iter().sum::<f64>() / xs.len() as f64;
    let ss: f64 = xs.iter().map(|x| (x - mean).powi(2)).sum();
    ss / (xs.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Transaction};
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;

    fn table(rows: &[(i64, i64, Direction)]) -> ResultTable {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        ResultTable::new(
            rows.iter()
                .map(|(day, cents, dir)| Transaction {
                    date: start + Duration::days(*day),
                    description: format!("row {day}"),
                    amount: Decimal::new(*cents, 2),
                    direction: *dir,
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score(&ResultTable::empty()), 0.0);
    }

    #[test]
    fn test_single_row() {
        let b = breakdown(&table(&[(0, 1000, Direction::Debit)]));
        assert_eq!(b.volume, 10.0);
        assert_eq!(b.span, 5.0);
        assert_eq!(b.variance, 0.0);
        assert_eq!(b.balance, 0.0);
    }

    #[test]
    fn test_breakdown_terms() {
        let t = table(&[
            (0, 10000, Direction::Credit),
            (9, 30000, Direction::Debit),
        ]);
        let b = breakdown(&t);
        assert_eq!(b.volume, 20.0);
        assert_eq!(b.span, 50.0);
        // amounts 100 and 300: sample variance 20000
        assert!((b.variance - 0.02).abs() < 1e-12);
        assert_eq!(b.balance, 50.0);
        assert!((score(&t) - 120.02).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_wide_table_beats_narrow_one_sided() {
        let a_rows: Vec<_> = (0..40)
            .map(|i| {
                let dir = if i % 2 == 0 { Direction::Credit } else { Direction::Debit };
                ((i * 29 / 39) as i64, 1000 + i as i64 * 137, dir)
            })
            .collect();
        let b_rows: Vec<_> = (0..5)
            .map(|i| ((i % 2) as i64, 5000, Direction::Debit))
            .collect();
        let a = table(&a_rows);
        let b = table(&b_rows);

        assert!(breakdown(&a).volume > breakdown(&b).volume);
        assert!(breakdown(&a).span > breakdown(&b).span);
        assert!(breakdown(&a).balance > breakdown(&b).balance);
        assert!(score(&a) > score(&b));
    }

    #[test]
    fn test_superset_scores_at_least_subset() {
        let base = [
            (0, 1000, Direction::Credit),
            (3, 2000, Direction::Debit),
            (6, 1500, Direction::Credit),
        ];
        let mut more = base.to_vec();
        more.push((6, 1800, Direction::Debit));
        assert!(score(&table(&more)) >= score(&table(&base)));
    }
}
