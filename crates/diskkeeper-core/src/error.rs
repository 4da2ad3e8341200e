//! Error types for the snapshot pipeline.
//!
//! Only failures that invalidate a whole run (no scan targets) or a whole
//! volume's artifact (write/archive failure) are represented here.
//! Per-directory traversal errors and per-field metadata errors are absorbed
//! where they occur: the subtree is skipped or the field is left empty, and
//! the scan continues.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the snapshot pipeline.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No volumes were resolved for scanning. Fatal before any traversal.
    #[error(
        "no scan targets: specify a volume explicitly or enable at least one \
         volume category (fixed / removable / network)"
    )]
    NoScanTargets,

    /// Writing the CSV artifact failed. The scan for that volume is
    /// incomplete and any partial output is discardable.
    #[error("failed to write snapshot artifact {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Archiving the CSV artifact into a zip failed.
    #[error("failed to archive snapshot artifact {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}
