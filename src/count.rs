//! Directory scan: count the immediate entries that are not directories.

use std::path::Path;

/// Count the non-directory entries directly inside `dir`.
///
/// Entry types are taken from the directory listing without following
/// symlinks, so a symlink counts as a file even when it points at a
/// directory. Subdirectories are never descended into. Entries removed
/// between the listing and the type lookup are left out of the count.
pub fn count_files(dir: &Path) -> std::io::Result<u64> {
    let entries = std::fs::read_dir(dir)?
        .map(|entry| entry.and_then(|e| e.file_type()).map(|t| t.is_dir()));
    let count = tally(entries)?;
    tracing::debug!(path = %dir.display(), count, "scanned directory");
    Ok(count)
}

/// Count the `false` (not a directory) results, skipping vanished entries.
fn tally<I>(entries: I) -> std::io::Result<u64>
where
    I: IntoIterator<Item = std::io::Result<bool>>,
{
    let mut count = 0;
    for entry in entries {
        match entry {
            Ok(true) => {}
            Ok(false) => count += 1,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(error = %e, "entry vanished during scan");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(count)
}
