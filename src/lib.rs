//! `logcalc` aggregates score lines out of a log file: every line beginning
//! with a fixed prefix carries an integer score, and the crate computes the
//! mean of the base-10 logarithms of those scores in a single sequential
//! pass.
//!
//! The primary entrypoint is [`scan::scan_from_path`], which opens the file,
//! folds matched lines into a [`accumulate::LogScoreAccumulator`], and
//! returns a [`types::ScoreSummary`]. [`scan::scan_from_reader`] runs the
//! same pass over any in-memory source.
//!
//! Malformed input is fatal by design: the first non-integer field, the
//! first non-positive score, or a scan with no matched lines at all aborts
//! the run with a [`ScoreError`] and no report is produced. This is a
//! one-shot offline aggregation, not a service, so the first error surfaces
//! untouched.
//!
//! ## Example
//!
//! ```rust
//! use logcalc::report;
//! use logcalc::scan::{scan_from_reader, ScanOptions};
//!
//! let input = "ret_score: 100\nsome other line\nret_score: 1000\n";
//! let summary = scan_from_reader(input.as_bytes(), &ScanOptions::default()).unwrap();
//!
//! assert_eq!(summary.count, 2);
//! assert!((summary.sum - 5.0).abs() < 1e-12);
//! assert!((summary.mean - 2.5).abs() < 1e-12);
//! println!("{}", report::render(&summary));
//! ```
//!
//! ## Modules
//!
//! - [`scan`]: the line-scanning pass and its fixed constants
//! - [`accumulate`]: the running sum/count accumulator
//! - [`report`]: the two-line textual report
//! - [`observability`]: optional observer hooks for scan outcomes
//! - [`error`]: the error taxonomy (all variants fatal)

pub mod accumulate;
pub mod error;
pub mod observability;
pub mod report;
pub mod scan;
pub mod types;

pub use error::{ScoreError, ScoreResult};
