//! Line-per-row text handed to the downstream classification step:
//!   05/03/2024 | Tarifa Pacote de Serviços | 15,90 | D

use extrato_core::dates::BR_DATE_FORMAT;
use extrato_core::{ResultTable, format_amount};

pub fn handoff_text(table: &ResultTable) -> String {
    table
        .iter()
        .map(|t| {
            format!(
                "{} | {} | {} | {}\n",
                t.date.format(BR_DATE_FORMAT),
                t.description,
                format_amount(t.amount),
                t.direction.code()
            )
        })
        .collect()
}
