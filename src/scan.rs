//! Line scanning and score extraction.
//!
//! Most callers should use [`scan_from_path`], which opens a log file and
//! aggregates it in a single sequential pass. [`scan_from_reader`] is the
//! same pass over any [`BufRead`] source, which is what the tests use.
//!
//! A line matches when its first `prefix.len()` characters equal the prefix
//! exactly (case-sensitive). The score field of a matched line is everything
//! from `field_offset` to the end of the line. The offset is an opaque
//! constant of the log convention; no delimiter meaning is attached to the
//! characters between the prefix and the field.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::accumulate::LogScoreAccumulator;
use crate::error::{ScoreError, ScoreResult};
use crate::observability::{ScanContext, ScanObserver, ScanStats};
use crate::types::ScoreSummary;

/// Fixed input filename used by the `logcalc` binary.
pub const LOG_FILE: &str = "error.txt";

/// Prefix token identifying score lines (`ret_score: <n>`).
pub const SCORE_PREFIX: &str = "ret_score";

/// Character offset at which the numeric field of a matched line begins.
pub const FIELD_OFFSET: usize = 11;

/// Options controlling a scan.
///
/// [`Default`] reproduces the original log convention
/// ([`SCORE_PREFIX`]/[`FIELD_OFFSET`]) with no observer attached.
#[derive(Clone)]
pub struct ScanOptions {
    /// Prefix a line must start with to be aggregated.
    pub prefix: String,
    /// Offset of the numeric field within a matched line.
    pub field_offset: usize,
    /// Optional observer notified of scan outcomes.
    pub observer: Option<Arc<dyn ScanObserver>>,
}

impl fmt::Debug for ScanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOptions")
            .field("prefix", &self.prefix)
            .field("field_offset", &self.field_offset)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            prefix: SCORE_PREFIX.to_string(),
            field_offset: FIELD_OFFSET,
            observer: None,
        }
    }
}

/// Scan a log file and aggregate its matched score lines.
///
/// The file is opened read-only and held only for the duration of the pass;
/// the handle is released on every exit path, including mid-scan failures.
/// When an observer is configured, this reports `on_success` with line
/// counters or `on_failure` with the error about to be returned.
///
/// # Errors
///
/// - [`ScoreError::Io`] if the file cannot be opened or read.
/// - [`ScoreError::NumericParse`] on the first matched line whose field is
///   not a valid integer.
/// - [`ScoreError::Domain`] on the first matched score `<= 0`.
/// - [`ScoreError::NoMatches`] if no line matched the prefix.
pub fn scan_from_path(path: impl AsRef<Path>, options: &ScanOptions) -> ScoreResult<ScoreSummary> {
    let path = path.as_ref();
    let outcome = File::open(path)
        .map_err(ScoreError::from)
        .and_then(|file| scan_counted(BufReader::new(file), options));

    match outcome {
        Ok((summary, stats)) => {
            if let Some(observer) = &options.observer {
                observer.on_success(&ScanContext::new(path), stats);
            }
            Ok(summary)
        }
        Err(error) => {
            if let Some(observer) = &options.observer {
                observer.on_failure(&ScanContext::new(path), &error);
            }
            Err(error)
        }
    }
}

/// Scan score lines from any buffered reader.
///
/// Same pass and error behavior as [`scan_from_path`], minus the file open
/// and the observer reporting.
pub fn scan_from_reader<R: BufRead>(reader: R, options: &ScanOptions) -> ScoreResult<ScoreSummary> {
    scan_counted(reader, options).map(|(summary, _)| summary)
}

fn scan_counted<R: BufRead>(
    reader: R,
    options: &ScanOptions,
) -> ScoreResult<(ScoreSummary, ScanStats)> {
    let mut acc = LogScoreAccumulator::new();
    let mut stats = ScanStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx as u64 + 1;
        stats.lines += 1;

        if !line.as_bytes().starts_with(options.prefix.as_bytes()) {
            continue;
        }

        // A matched line shorter than the offset yields an empty field,
        // which fails the integer parse like any other malformed field.
        let raw = line.get(options.field_offset..).unwrap_or("");
        let value: i64 = raw.trim().parse().map_err(|source| ScoreError::NumericParse {
            line: line_no,
            raw: raw.to_owned(),
            source,
        })?;

        acc.push(line_no, value)?;
        stats.matched += 1;
    }

    Ok((acc.finish()?, stats))
}
