use anyhow::Result;
use extrato_core::{CandidateRecord, InstitutionId};

/// One institution's statement grammar.
///
/// Implementations read the full extracted text and return raw candidates in
/// document order. Malformed lines are skipped or buffered, never reported as
/// errors; an `Err` means the grammar itself could not run.
pub trait Extractor: Send + Sync {
    fn institution(&self) -> InstitutionId;

    fn extract(&self, text: &str) -> Result<Vec<CandidateRecord>>;
}
