//! Observer hooks for scan outcomes.
//!
//! Observers are purely informational: they never alter control flow, and a
//! scan failure propagates unchanged whether or not an observer is attached.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ScoreError;

/// Context about one scan invocation.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// The input path being scanned.
    pub path: PathBuf,
}

impl ScanContext {
    /// Create a context for `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Counters reported on successful scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    /// Total lines read from the input.
    pub lines: u64,
    /// Lines that matched the score prefix.
    pub matched: u64,
}

/// Observer interface for scan outcomes.
///
/// Implementors can record metrics or logs.
pub trait ScanObserver: Send + Sync {
    /// Called when a scan completes with a summary.
    fn on_success(&self, _ctx: &ScanContext, _stats: ScanStats) {}

    /// Called when a scan aborts with an error.
    fn on_failure(&self, _ctx: &ScanContext, _error: &ScoreError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ScanObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ScanObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ScanObserver for CompositeObserver {
    fn on_success(&self, ctx: &ScanContext, stats: ScanStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ScanContext, error: &ScoreError) {
        for o in &self.observers {
            o.on_failure(ctx, error);
        }
    }
}

/// Logs scan outcomes to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ScanObserver for StdErrObserver {
    fn on_success(&self, ctx: &ScanContext, stats: ScanStats) {
        eprintln!(
            "[scan][ok] path={} lines={} matched={}",
            ctx.path.display(),
            stats.lines,
            stats.matched
        );
    }

    fn on_failure(&self, ctx: &ScanContext, error: &ScoreError) {
        eprintln!("[scan][err] path={} err={}", ctx.path.display(), error);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use super::{CompositeObserver, ScanContext, ScanObserver, ScanStats};
    use crate::error::ScoreError;

    #[derive(Default)]
    struct CountingObserver {
        successes: AtomicU64,
        failures: AtomicU64,
    }

    impl ScanObserver for CountingObserver {
        fn on_success(&self, _ctx: &ScanContext, _stats: ScanStats) {
            self.successes.fetch_add(1, Ordering::Relaxed);
        }

        fn on_failure(&self, _ctx: &ScanContext, _error: &ScoreError) {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn composite_fans_out_to_all_observers() {
        let a = Arc::new(CountingObserver::default());
        let b = Arc::new(CountingObserver::default());
        let composite = CompositeObserver::new(vec![a.clone(), b.clone()]);

        let ctx = ScanContext::new("error.txt");
        composite.on_success(&ctx, ScanStats { lines: 3, matched: 1 });
        composite.on_failure(&ctx, &ScoreError::NoMatches);

        assert_eq!(a.successes.load(Ordering::Relaxed), 1);
        assert_eq!(a.failures.load(Ordering::Relaxed), 1);
        assert_eq!(b.successes.load(Ordering::Relaxed), 1);
        assert_eq!(b.failures.load(Ordering::Relaxed), 1);
    }
}
