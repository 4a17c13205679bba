//! Logging setup

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::Level;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// Wall-clock time of day (UTC) with second precision
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        write!(w, "{:02}:{:02}:{:02}", (secs / 3600) % 24, (secs / 60) % 60, secs % 60)
    }
}

/// Install the global subscriber. Diagnostics go to stderr so they never mix
/// with anything a caller pipes from stdout.
pub fn setup_output(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // a subscriber may already be installed when called from tests
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(SecondPrecisionTimer)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
