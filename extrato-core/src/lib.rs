//! extrato-core: statement data model, noise classifier, amount/date parsing,
//! normalization and result scoring.

pub mod amount;
pub mod config;
pub mod dates;
pub mod noise;
pub mod normalize;
pub mod score;
pub mod types;

pub use amount::{AMOUNT_TOKEN, format_amount, parse_amount};
pub use config::ParserConfig;
pub use dates::{month_from_abbrev, month_from_name, parse_br_date};
pub use noise::{LineClass, classify, is_noise};
pub use normalize::{collapse_whitespace, normalize};
pub use score::{ScoreBreakdown, breakdown, score};
pub use types::{CandidateRecord, Direction, InstitutionId, ResultTable, Transaction};
