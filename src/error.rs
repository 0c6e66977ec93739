use std::num::ParseIntError;

use thiserror::Error;

/// Convenience result type for scan/aggregation operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Error type returned by the scan and accumulation functions.
///
/// Every variant is fatal: nothing in this crate recovers from, retries, or
/// substitutes a default for any of these. The first error encountered
/// aborts the run and no report is produced.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Underlying I/O error (e.g. log file missing, permission denied, read
    /// failure mid-scan).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A matched line's trailing field is not a valid integer.
    #[error("line {line}: score field '{raw}' is not a valid integer: {source}")]
    NumericParse {
        /// 1-based line number in the input.
        line: u64,
        /// The raw field text that failed to parse.
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// A matched line's score is zero or negative, so log10 is undefined.
    #[error("line {line}: log10 undefined for score {value}")]
    Domain {
        /// 1-based line number in the input.
        line: u64,
        /// The offending parsed value.
        value: i64,
    },

    /// The scan finished without a single matched line; the mean is
    /// undefined (division by a zero count).
    #[error("no line matched the score prefix; mean is undefined")]
    NoMatches,
}
