//! Directory walker built on `jwalk`, pinned to serial traversal.
//!
//! Excluded directory names are filtered out of each directory's children
//! *before* descent via `process_read_dir` — a pruned directory is neither
//! entered nor recorded. Per-directory read errors surface as `Err` items
//! in the entry stream; the affected subtree is skipped and siblings
//! continue, so one unreadable directory never fails a whole volume scan.

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use crate::model::{EntryRecord, ScanResult, Volume};
use crate::scanner::{metadata, ScanConfig};

/// Walk one volume root and collect a record per enumerated node.
///
/// The root itself is not recorded; every file and directory strictly
/// below it (minus excluded subtrees) yields exactly one record, in the
/// order the walk produces them.
pub fn walk_volume(volume: &Volume, config: &ScanConfig) -> ScanResult {
    let mut result = ScanResult::new(volume.clone());
    let mut read_errors: u64 = 0;

    let excluded = config.excluded_dirs.clone();
    let walker = WalkDir::new(&volume.root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial)
        .process_read_dir(move |_depth, _path, _state, children| {
            // Pure filter over the children list; excluded directories are
            // dropped before they can be recorded or descended into.
            children.retain(|child| match child {
                Ok(entry) => {
                    !(entry.file_type.is_dir()
                        && excluded.contains(entry.file_name.as_os_str()))
                }
                Err(_) => true,
            });
        });

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                // Typically access-denied while listing a directory. The
                // subtree is lost; the walk continues with siblings.
                read_errors += 1;
                let at = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!("skipping unreadable subtree at {at}: {err}");
                continue;
            }
        };

        // The walk root is not part of the inventory.
        if entry.depth == 0 {
            continue;
        }

        let path = entry.path().to_string_lossy().into_owned();
        let is_dir = entry.file_type.is_dir();

        // A failed stat is terminal for the record's metadata, never for
        // the walk: the record is still emitted with its path.
        let record = match metadata::collect(&entry.path()) {
            Some(meta) => EntryRecord {
                path,
                is_dir,
                size: meta.size,
                modified_raw: meta.modified_raw,
                modified_readable: meta.modified_readable,
                created_raw: meta.created_raw,
                created_readable: meta.created_readable,
            },
            None => EntryRecord::empty(path, is_dir),
        };
        result.push(record);
    }

    debug!(
        "walk of {} complete: {} records, {} unreadable subtrees",
        volume.root.display(),
        result.len(),
        read_errors
    );
    result
}
