//! Batch removal of collected artifact directories.

use crate::format::human_size;
use crate::scanner::directory_size;

use std::fs;
use std::path::PathBuf;

/// Options controlling clean behavior.
pub struct CleanOptions {
    /// Report what would be removed without touching the filesystem.
    pub dry_run: bool,
}

/// Aggregate outcome of one clean batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Artifact directories removed, or reported in dry-run mode.
    pub processed: usize,
    /// Directories that could not be removed.
    pub failed: usize,
    /// Total bytes across processed directories, accumulated in both dry-run
    /// and delete mode.
    pub bytes: u64,
}

/// Process the collected artifact paths: size each one, report it, and unless
/// dry-run is set, delete its entire subtree.
///
/// A failed deletion (permission denied, path vanished, disk busy) is logged
/// and counted; it never aborts the rest of the batch. Failed paths are left
/// out of `processed` and `bytes`, so the summary reflects only space that
/// was actually freed (or would be, in dry-run).
pub fn clean(artifacts: &[PathBuf], options: &CleanOptions) -> CleanSummary {
    let mut summary = CleanSummary::default();

    for path in artifacts {
        let size = directory_size(path);

        let action = if options.dry_run {
            "Would remove"
        } else {
            "Removing"
        };
        println!("{} {} ({})", action, path.display(), human_size(size));

        if !options.dry_run {
            if let Err(err) = fs::remove_dir_all(path) {
                log::warn!("failed to remove {}: {}", path.display(), err);
                summary.failed += 1;
                continue;
            }
        }

        summary.processed += 1;
        summary.bytes += size;
    }

    summary
}
