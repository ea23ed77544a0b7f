//! Aligned plain-text table for the terminal.

use extrato_core::dates::BR_DATE_FORMAT;
use extrato_core::{ResultTable, format_amount};

const HEADERS: [&str; 4] = ["Data", "Histórico", "Valor", "Tipo"];

fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

fn pad_left(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{s}", " ".repeat(width.saturating_sub(len)))
}

/// Render the table with a header row. Amounts are right-aligned.
pub fn render_table(table: &ResultTable) -> String {
    let rows: Vec<[String; 4]> = table
        .iter()
        .map(|t| {
            [
                t.date.format(BR_DATE_FORMAT).to_string(),
                t.description.clone(),
                format_amount(t.amount),
                t.direction.code().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 4]| {
        format!(
            "{}  {}  {}  {}",
            pad_right(cells[0], widths[0]),
            pad_right(cells[1], widths[1]),
            pad_left(cells[2], widths[2]),
            cells[3]
        )
    };

    let mut out = line(HEADERS);
    out.push('\n');
    for row in &rows {
        out.push_str(&line([&row[0], &row[1], &row[2], &row[3]]));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrato_core::{CandidateRecord, normalize};

    #[test]
    fn test_render_aligns_columns() {
        let table = normalize(&[
            CandidateRecord::new("01/03/2024", "Pix recebido", "1.234,56", "C"),
            CandidateRecord::new("05/03/2024", "Tarifa", "15,90", "D"),
        ]);
        let out = render_table(&table);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Data        Histórico        Valor  Tipo");
        assert_eq!(lines[1], "01/03/2024  Pix recebido  1.234,56  C");
        assert_eq!(lines[2], "05/03/2024  Tarifa           15,90  D");
    }

    #[test]
    fn test_render_empty_has_header() {
        assert_eq!(render_table(&ResultTable::empty()).lines().count(), 1);
    }
}
