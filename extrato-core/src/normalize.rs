//! Candidate records -> validated, chronologically sorted result table.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::amount::parse_amount;
use crate::dates::parse_br_date;
use crate::types::{CandidateRecord, Direction, ResultTable, Transaction};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to one space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Validate one candidate. `None` when the amount, date or description is
/// unusable; the row is then dropped as a whole.
pub fn normalize_one(candidate: &CandidateRecord) -> Option<Transaction> {
    let Some(amount) = parse_amount(&candidate.amount_text) else {
        debug!(amount = %candidate.amount_text, "dropping row: unparsable amount");
        return None;
    };
    let Some(date) = parse_br_date(&candidate.date_text) else {
        debug!(date = %candidate.date_text, "dropping row: unparsable date");
        return None;
    };
    let description = collapse_whitespace(&candidate.description);
    if description.is_empty() {
        debug!(date = %candidate.date_text, "dropping row: blank description");
        return None;
    }

    Some(Transaction {
        date,
        description,
        amount,
        direction: Direction::from_hint(&candidate.direction_hint),
    })
}

/// Normalize a whole extractor run. Never fails: an input with no usable rows
/// yields an empty table.
pub fn normalize(candidates: &[CandidateRecord]) -> ResultTable {
    let rows: Vec<Transaction> = candidates.iter().filter_map(normalize_one).collect();
    trace!(kept = rows.len(), total = candidates.len(), "normalized candidates");
    ResultTable::new(rows)
}
