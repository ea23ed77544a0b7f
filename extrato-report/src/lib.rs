//! extrato-report: output shapes for extracted statements (CSV, JSON, the
//! classification hand-off text, terminal table) and per-statement totals.

pub mod export;
pub mod handoff;
pub mod render;
pub mod summary;

pub use export::{CSV_HEADER, to_json, write_csv};
pub use handoff::handoff_text;
pub use render::render_table;
pub use summary::{StatementSummary, summarize};
