//! Line-scan building blocks shared by the statement grammars.

use extrato_core::{AMOUNT_TOKEN, collapse_whitespace};
use once_cell::sync::Lazy;
use regex::Regex;

static SHORT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})/(\d{2})(?:/(\d{4}))?\b").unwrap());

/// Compile a pattern where `{AMOUNT}` stands for the localized amount token.
pub(crate) fn amount_regex(pattern: &str) -> Regex {
    Regex::new(&pattern.replace("{AMOUNT}", AMOUNT_TOKEN)).unwrap()
}

/// Trimmed lines of the statement, in order.
pub fn statement_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim)
}

/// A `DD/MM` date at the start of `line`, completed with `fallback_year`
/// unless an explicit `/YYYY` follows. Returns the `DD/MM/YYYY` text and the
/// byte offset where the date token ends.
pub fn leading_short_date(line: &str, fallback_year: i32) -> Option<(String, usize)> {
    let caps = SHORT_DATE.captures(line)?;
    let end = caps.get(0)?.end();
    let year = caps
        .get(3)
        .map(|y| y.as_str().to_string())
        .unwrap_or_else(|| fallback_year.to_string());
    Some((format!("{}/{}/{}", &caps[1], &caps[2], year), end))
}

/// Slice `line[start..end]`, empty when the range is inverted.
pub fn between(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Sticky parsing state threaded through a grammar's line loop: the last date
/// seen and the description fragments not yet attached to an amount.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineScan {
    pub current_date: Option<String>,
    pub buffer: Vec<String>,
}

impl LineScan {
    /// A date token opens a new transaction context.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.current_date = Some(date.into());
        self.buffer.clear();
    }

    pub fn date(&self) -> Option<String> {
        self.current_date.clone()
    }

    /// Keep a line with no amount as a continuation of the next description.
    pub fn push_fragment(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            self.buffer.push(fragment.to_string());
        }
    }

    /// Buffered fragments followed by `tail`, whitespace-collapsed. Clears the
    /// buffer.
    pub fn take_description(&mut self, tail: &str) -> String {
        self.buffer.push(tail.to_string());
        let joined = self.buffer.join(" ");
        self.buffer.clear();
        collapse_whitespace(&joined)
    }

    /// Buffered fragments only, leaving the buffer untouched.
    pub fn buffered(&self) -> String {
        collapse_whitespace(&self.buffer.join(" "))
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}

/// Direction hint from a debit flag.
pub fn hint(debit: bool) -> &'static str {
    if debit { "D" } else { "C" }
}
