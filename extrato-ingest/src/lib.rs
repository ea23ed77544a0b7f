//! extrato-ingest: per-institution statement grammars, bank detection and the
//! extractor arbitration that picks the best result.

pub mod detect;
pub mod extractor;
pub mod orchestrator;
pub mod parsers;
pub mod scan;

pub use detect::detect;
pub use extractor::Extractor;
pub use orchestrator::{
    BestExtraction, ExtractorOutcome, extract_best, extract_best_with, extract_detected,
    extract_direct,
};
pub use parsers::{all_extractors, extractor_for};
