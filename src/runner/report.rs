//! Metrics for a completed run

use crate::dataset::{Bar, Preset};
use crate::sorting::Algorithm;
use std::fmt::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MILLIS_PER_DAY: u128 = 24 * 60 * 60 * 1000;

/// What the orchestrator measured around one sort
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub preset: Preset,
    pub delay_ms: u64,
    pub started_at: SystemTime,
    pub finished_at: SystemTime,
    /// Monotonic time spent inside the sort
    pub elapsed: Duration,
    pub steps: u64,
    /// The sorted dataset
    pub data: Vec<Bar>,
}

impl RunReport {
    /// Metric block appended to the log after each run.
    ///
    /// `Start` and `Ended` are UTC times of day (see [`format_clock`]);
    /// `Speed` is the monotonic time spent sorting.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "Start: {}", format_clock(self.started_at));
        let _ = writeln!(out, "Ended: {}", format_clock(self.finished_at));
        let _ = writeln!(out, "Delay: {} ms", self.delay_ms);
        let _ = writeln!(out, "Speed: {} ns", self.elapsed.as_nanos());
        let _ = writeln!(out, "Steps: {}", self.steps);
        out
    }
}

/// UTC wall-clock time of day as `HH:MM:SS.mmm`
pub fn format_clock(time: SystemTime) -> String {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
        % MILLIS_PER_DAY;

    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1000) % 60;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours,
        minutes,
        seconds,
        millis % 1000
    )
}
