//! Parser configuration shared by every extractor.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Year given to `DD/MM` and `D / mmm` dates that carry no year of their
    /// own. Statements spanning a year boundary need this set per document.
    pub fallback_year: i32,
}

impl ParserConfig {
    pub fn with_year(fallback_year: i32) -> Self {
        Self { fallback_year }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fallback_year: Local::now().year(),
        }
    }
}
