//! Scanner module — traversal and metadata capture for one volume.
//!
//! The pipeline is synchronous and single-threaded per volume: the walker
//! enumerates every node under the volume root (pruning excluded directory
//! names before descent) and the metadata collector stats each node with
//! per-field failure isolation. A single unreadable directory or file never
//! aborts the walk.

pub mod metadata;
pub mod walker;

use std::collections::HashSet;
use std::ffi::OsString;

use crate::model::{ScanResult, Volume};

/// Directory names that are never descended into and never recorded.
/// Recycle-bin and system-reserved directories.
const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "$RECYCLE.BIN",
    "$Recycle.Bin",
    "System Volume Information",
];

/// Immutable traversal configuration, passed into the walker rather than
/// held in process-wide state so volume scans stay independently testable.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory names pruned from every directory listing before descent.
    /// Applies to directories only; files with these names are recorded.
    pub excluded_dirs: HashSet<OsString>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(OsString::from)
                .collect(),
        }
    }
}

/// Walk one volume and capture a record for every enumerated node.
///
/// Infallible by design: traversal errors shrink the result (subtrees are
/// skipped), metadata errors shrink individual records (fields left empty).
/// An unreachable root simply produces an empty result, which the sink
/// discards without persisting an artifact.
pub fn scan_volume(volume: &Volume, config: &ScanConfig) -> ScanResult {
    walker::walk_volume(volume, config)
}
