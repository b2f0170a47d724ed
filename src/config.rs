use std::path::PathBuf;
use std::time::Duration;

/// Time between two samples. Fixed; not exposed on the command line.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Resolved settings for one monitoring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Directory whose immediate entries are counted.
    pub dir: PathBuf,
    /// CSV file the samples are appended to.
    pub output: PathBuf,
    /// Suppress the per-tick status line.
    pub quiet: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            output: PathBuf::from("file_count.csv"),
            quiet: false,
        }
    }
}
