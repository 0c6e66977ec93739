//! Running log-score accumulation.

use crate::error::{ScoreError, ScoreResult};
use crate::types::ScoreSummary;

/// Accumulates the base-10 logarithms of matched scores during a scan.
///
/// Both fields start at zero and are mutated only by [`push`](Self::push)
/// during the single sequential pass. Each scan builds its own accumulator;
/// no state is shared across invocations.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LogScoreAccumulator {
    sum: f64,
    count: u64,
}

impl LogScoreAccumulator {
    /// Create a zeroed accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one matched score into the running sum.
    ///
    /// Fails with [`ScoreError::Domain`] when `value <= 0` (log10 is
    /// undefined there); the accumulator is left untouched in that case.
    /// `line` is the 1-based input line number, used only for the error.
    pub fn push(&mut self, line: u64, value: i64) -> ScoreResult<()> {
        if value <= 0 {
            return Err(ScoreError::Domain { line, value });
        }
        self.sum += (value as f64).log10();
        self.count += 1;
        Ok(())
    }

    /// Sum of logarithms folded in so far.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Number of scores folded in so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Derive the final summary, computing the mean exactly once.
    ///
    /// Fails with [`ScoreError::NoMatches`] when nothing was pushed, since
    /// `sum / 0` has no meaning for this report.
    pub fn finish(self) -> ScoreResult<ScoreSummary> {
        if self.count == 0 {
            return Err(ScoreError::NoMatches);
        }
        Ok(ScoreSummary {
            mean: self.sum / self.count as f64,
            sum: self.sum,
            count: self.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LogScoreAccumulator;
    use crate::error::ScoreError;

    #[test]
    fn push_accumulates_log10_in_order() {
        let mut acc = LogScoreAccumulator::new();
        acc.push(1, 100).unwrap();
        acc.push(2, 1000).unwrap();

        assert_eq!(acc.count(), 2);
        assert!((acc.sum() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn push_rejects_zero_and_negative() {
        let mut acc = LogScoreAccumulator::new();
        acc.push(1, 10).unwrap();

        let err = acc.push(2, 0).unwrap_err();
        assert!(matches!(err, ScoreError::Domain { line: 2, value: 0 }));

        let err = acc.push(3, -5).unwrap_err();
        assert!(matches!(err, ScoreError::Domain { line: 3, value: -5 }));

        // Rejected pushes leave the accumulator untouched.
        assert_eq!(acc.count(), 1);
        assert!((acc.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn finish_computes_mean() {
        let mut acc = LogScoreAccumulator::new();
        acc.push(1, 100).unwrap();
        acc.push(2, 10000).unwrap();

        let summary = acc.finish().unwrap();
        assert_eq!(summary.count, 2);
        assert!((summary.sum - 6.0).abs() < 1e-12);
        assert!((summary.mean - 3.0).abs() < 1e-12);
    }

    #[test]
    fn finish_fails_on_empty_accumulator() {
        let err = LogScoreAccumulator::new().finish().unwrap_err();
        assert!(matches!(err, ScoreError::NoMatches));
    }
}
