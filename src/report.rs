//! Report rendering for [`crate::types::ScoreSummary`].

use std::io::{self, Write};

use crate::types::ScoreSummary;

/// Render the two-line report for a summary.
///
/// The layout is fixed:
///
/// ```text
/// mean <mean>,
/// sum <sum> cnt <count>
/// ```
///
/// The floating-point values use Rust's default `f64` formatting.
pub fn render(summary: &ScoreSummary) -> String {
    format!(
        "mean {},\nsum {} cnt {}",
        summary.mean, summary.sum, summary.count
    )
}

/// Write the rendered report plus a trailing newline to `out`.
pub fn write_report<W: Write>(out: &mut W, summary: &ScoreSummary) -> io::Result<()> {
    writeln!(out, "{}", render(summary))
}
