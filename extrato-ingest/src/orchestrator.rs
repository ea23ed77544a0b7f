//! Direct and universal extraction modes.
//!
//! Direct mode runs one institution's grammar (or the detected one). Universal
//! mode runs every registered grammar over the same text, normalizes and
//! scores each result, and keeps the best. A grammar that fails counts as an
//! empty result; it never aborts the run.

use extrato_core::{InstitutionId, ParserConfig, ResultTable, ScoreBreakdown, breakdown, normalize};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::detect::detect;
use crate::extractor::Extractor;
use crate::parsers::{all_extractors, extractor_for};

/// What one extractor contributed to a universal run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractorOutcome {
    pub institution: InstitutionId,
    pub candidates: usize,
    pub rows: usize,
    pub score: ScoreBreakdown,
    pub error: Option<String>,
}

/// Winner of a universal run.
#[derive(Debug, Clone)]
pub struct BestExtraction {
    pub table: ResultTable,
    /// `None` when every extractor came back empty.
    pub institution: Option<InstitutionId>,
    pub score: f64,
    pub outcomes: Vec<ExtractorOutcome>,
}

impl BestExtraction {
    pub fn label(&self) -> &'static str {
        self.institution.map(|id| id.label()).unwrap_or("none")
    }
}

/// Run one extractor and normalize its output. Failures become an empty table.
fn run_one(extractor: &dyn Extractor, text: &str) -> (ResultTable, usize, Option<String>) {
    match extractor.extract(text) {
        Ok(candidates) => (normalize(&candidates), candidates.len(), None),
        Err(e) => {
            warn!(institution = %extractor.institution(), error = %e, "extractor failed");
            (ResultTable::empty(), 0, Some(format!("{e:#}")))
        }
    }
}

/// Direct mode: the given institution's grammar, generic fallback for
/// [`InstitutionId::Generic`].
pub fn extract_direct(institution: InstitutionId, text: &str, config: &ParserConfig) -> ResultTable {
    let extractor = extractor_for(institution, config);
    let (table, candidates, _) = run_one(extractor.as_ref(), text);
    debug!(institution = %institution, candidates, rows = table.len(), "direct extraction");
    table
}

/// Detect the institution, then run its grammar.
pub fn extract_detected(text: &str, config: &ParserConfig) -> (ResultTable, InstitutionId) {
    let institution = detect(text);
    (extract_direct(institution, text, config), institution)
}

/// Universal mode over the registered extractors.
pub fn extract_best(text: &str, config: &ParserConfig) -> BestExtraction {
    extract_best_with(&all_extractors(config), text)
}

/// Universal mode over an explicit, ordered extractor list. Ties go to the
/// earlier extractor.
pub fn extract_best_with(extractors: &[Box<dyn Extractor>], text: &str) -> BestExtraction {
    let mut best = BestExtraction {
        table: ResultTable::empty(),
        institution: None,
        score: 0.0,
        outcomes: Vec::with_capacity(extractors.len()),
    };

    for extractor in extractors {
        let institution = extractor.institution();
        let (table, candidates, error) = run_one(extractor.as_ref(), text);
        let score = breakdown(&table);
        let total = score.total();
        debug!(institution = %institution, candidates, rows = table.len(), score = total, "scored extractor");

        best.outcomes.push(ExtractorOutcome {
            institution,
            candidates,
            rows: table.len(),
            score,
            error,
        });

        if total > best.score {
            best.score = total;
            best.table = table;
            best.institution = Some(institution);
        }
    }

    info!(winner = best.label(), score = best.score, rows = best.table.len(), "universal extraction");
    best
}
