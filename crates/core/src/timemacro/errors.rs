//! Error types for time macro parsing and evaluation.

use std::num::ParseIntError;

use thiserror::Error;

/// Why a single placeholder could not be expanded.
///
/// These never reach callers of [`expand_time_macros`](super::expand_time_macros);
/// the placeholder is left as written instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeMacroError {
    #[error("not a time macro: {0}")]
    NotAMacro(String),

    #[error("unknown time macro variable: {0}")]
    UnknownVariable(String),

    #[error("invalid {term} offset '{value}': {source}")]
    InvalidOffset {
        term: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("offset moves '{raw}' outside the supported date range")]
    OutOfRange { raw: String },
}
