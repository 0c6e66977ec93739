//! Result types produced by a completed scan.

/// Aggregated log-score statistics for one scan.
///
/// Produced by [`crate::accumulate::LogScoreAccumulator::finish`] after the
/// input is exhausted. `count` is always at least 1 (a scan with no matched
/// lines fails with [`crate::ScoreError::NoMatches`] instead of producing a
/// summary), and `mean == sum / count as f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Arithmetic mean of the base-10 logarithms of the matched scores.
    pub mean: f64,
    /// Sum of the base-10 logarithms, in file order.
    pub sum: f64,
    /// Number of matched lines.
    pub count: u64,
}
