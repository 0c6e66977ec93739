use std::io;

use logcalc::report;
use logcalc::scan::{scan_from_path, ScanOptions, LOG_FILE};
use logcalc::ScoreResult;

/// Scan `error.txt` and print the mean log-score report.
///
/// Any failure (missing file, malformed field, non-positive score, zero
/// matches) propagates out of `main`, which exits non-zero with the error's
/// default trace and no report.
fn main() -> ScoreResult<()> {
    let summary = scan_from_path(LOG_FILE, &ScanOptions::default())?;
    report::write_report(&mut io::stdout().lock(), &summary)?;
    Ok(())
}
