//! The sampling loop: once per interval, count the files in the monitored
//! directory and append a row to the CSV log.
//!
//! A tick that fails (directory unreadable, row not written) is reported and
//! skipped; the loop itself only ends when the shutdown future resolves.

use crate::config::{MonitorConfig, SAMPLE_INTERVAL};
use crate::count::count_files;
use crate::csv_log::CsvLog;
use crate::error::{StartupError, TickError};
use crate::sample::Sample;
use chrono::{DateTime, Local, TimeZone};
use std::fs::File;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Ticks that appended a row.
    pub samples: u64,
    /// Ticks that were reported and skipped.
    pub skipped: u64,
}

pub struct Sampler<W: Write = File> {
    dir: PathBuf,
    log: CsvLog<W>,
    quiet: bool,
}

impl Sampler<File> {
    /// Validate the monitored directory, then open the CSV log.
    ///
    /// The directory is checked first so a bad `dir` never creates or
    /// touches the output file.
    pub fn start(config: &MonitorConfig) -> Result<Self, StartupError> {
        check_directory(&config.dir)?;
        let log = CsvLog::open(&config.output)?;
        tracing::info!(
            dir = %config.dir.display(),
            output = %config.output.display(),
            "sampler started"
        );
        Ok(Self::with_log(config.dir.clone(), log, config.quiet))
    }
}

impl<W: Write> Sampler<W> {
    /// Sample `dir` into an already-open log.
    pub fn with_log(dir: PathBuf, log: CsvLog<W>, quiet: bool) -> Self {
        Self { dir, log, quiet }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn output(&self) -> &Path {
        self.log.path()
    }

    /// Take one sample stamped with `at` and append it to the log.
    pub fn tick<Tz: TimeZone>(&mut self, at: &DateTime<Tz>) -> Result<Sample, TickError> {
        let file_count = count_files(&self.dir).map_err(|e| TickError::ReadDir {
            path: self.dir.clone(),
            source: e,
        })?;
        let sample = Sample::new(at, file_count);
        self.log.append(&sample)?;
        Ok(sample)
    }

    /// Sample every [`SAMPLE_INTERVAL`] until `shutdown` resolves.
    ///
    /// The first sample is taken one interval after the call. Late ticks are
    /// delayed rather than fired in a burst.
    pub async fn run<F>(&mut self, shutdown: F) -> RunStats
    where
        F: Future<Output = ()>,
    {
        let mut stats = RunStats::default();
        let mut ticker = interval_at(Instant::now() + SAMPLE_INTERVAL, SAMPLE_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    match self.tick(&Local::now()) {
                        Ok(sample) => {
                            stats.samples += 1;
                            if !self.quiet {
                                println!(
                                    "[{}] Found {} files in {}",
                                    sample.formatted_timestamp(),
                                    sample.file_count,
                                    self.dir.display()
                                );
                            }
                        }
                        Err(e) => {
                            stats.skipped += 1;
                            tracing::warn!(error = %e, "sample skipped");
                        }
                    }
                }
            }
        }

        tracing::info!(
            samples = stats.samples,
            skipped = stats.skipped,
            "sampling stopped"
        );
        stats
    }
}

fn check_directory(dir: &Path) -> Result<(), StartupError> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(StartupError::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(StartupError::DirectoryMissing {
                path: dir.to_path_buf(),
            })
        }
        Err(e) => {
            // Exists but could not be inspected; each tick reports the failure.
            tracing::warn!(path = %dir.display(), error = %e, "could not stat directory");
            Ok(())
        }
    }
}
