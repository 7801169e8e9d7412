//! Cart printout parsing.

mod parser;
pub mod rules;

pub use parser::{parse_cart, CartParser, LineScanParser, ParseOutcome, FIELD_LINES};

use thiserror::Error;

/// Why a candidate record was dropped. Always recovered inside the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than four value lines follow the record header.
    #[error("record {code} at line {line} is truncated ({available} of 4 value lines)")]
    Truncated {
        line: usize,
        code: String,
        available: usize,
    },
}
