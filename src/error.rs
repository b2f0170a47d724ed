use std::path::PathBuf;

/// Errors that abort the process before the sampling loop starts.
#[derive(Debug)]
pub enum StartupError {
    /// The directory to monitor does not exist.
    DirectoryMissing { path: PathBuf },
    /// The directory path exists but names something other than a directory.
    NotADirectory { path: PathBuf },
    /// Failed to open the CSV file for append.
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the CSV file's metadata after opening it.
    StatOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write or flush the header row.
    WriteHeader {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::DirectoryMissing { path } => {
                write!(f, "Directory '{}' does not exist", path.display())
            }
            StartupError::NotADirectory { path } => {
                write!(f, "'{}' is not a directory", path.display())
            }
            StartupError::OpenOutput { path, source } => {
                write!(f, "failed to open output file {}: {}", path.display(), source)
            }
            StartupError::StatOutput { path, source } => {
                write!(
                    f,
                    "failed to get file info for {}: {}",
                    path.display(),
                    source
                )
            }
            StartupError::WriteHeader { path, source } => {
                write!(
                    f,
                    "failed to write CSV header to {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::DirectoryMissing { .. } | StartupError::NotADirectory { .. } => None,
            StartupError::OpenOutput { source, .. } => Some(source),
            StartupError::StatOutput { source, .. } => Some(source),
            StartupError::WriteHeader { source, .. } => Some(source),
        }
    }
}

/// Errors that cost a single tick. The loop reports them and carries on.
#[derive(Debug)]
pub enum TickError {
    /// Listing the monitored directory failed.
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Appending or flushing the sample row failed.
    WriteRow {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for TickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickError::ReadDir { path, source } => {
                write!(f, "error reading directory {}: {}", path.display(), source)
            }
            TickError::WriteRow { path, source } => {
                write!(f, "error writing to CSV {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for TickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TickError::ReadDir { source, .. } => Some(source),
            TickError::WriteRow { source, .. } => Some(source),
        }
    }
}
