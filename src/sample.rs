use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};

/// Format used for the `Timestamp` column: 24-hour local time, whole seconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One observation: when the tick fired and how many files were present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub file_count: u64,
}

impl Sample {
    /// Build a sample from a wall-clock instant, dropping sub-second precision.
    pub fn new<Tz: TimeZone>(at: &DateTime<Tz>, file_count: u64) -> Self {
        let local = at.naive_local();
        let timestamp = local.with_nanosecond(0).unwrap_or(local);
        Self {
            timestamp,
            file_count,
        }
    }

    /// `YYYY-MM-DD HH:MM:SS`, always 19 characters.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The CSV row for this sample, without a line terminator.
    pub fn csv_row(&self) -> String {
        format!("{},{}", self.formatted_timestamp(), self.file_count)
    }
}
