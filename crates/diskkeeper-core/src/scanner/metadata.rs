//! Per-entry metadata capture.
//!
//! Every attribute is an independent `Option`: a failed stat empties all of
//! them, an unrepresentable timestamp empties only its readable form while
//! the raw numeric value is kept. Absence is a first-class outcome, not a
//! swallowed error, and there are no retries.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, LocalResult, TimeZone};
use tracing::trace;

/// Timestamp layout of the readable fields, local time.
const READABLE_FORMAT: &str = "%Y-%m-%d %H-%M-%S";

/// The metadata attributes captured for one node, each independently
/// absent when unreadable.
#[derive(Debug, Clone)]
pub struct EntryMetadata {
    pub size: Option<u64>,
    pub modified_raw: Option<f64>,
    pub modified_readable: Option<String>,
    pub created_raw: Option<f64>,
    pub created_readable: Option<String>,
}

/// Stat one path and capture whatever metadata resolves.
///
/// Follows symlinks, so a dangling link counts as a failed stat. `None`
/// means the stat itself failed; the caller still emits a record with its
/// path and every metadata field empty.
pub fn collect(path: &Path) -> Option<EntryMetadata> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            trace!("stat failed for {}: {err}", path.display());
            return None;
        }
    };

    let modified_raw = meta.modified().ok().map(epoch_seconds);
    let created_raw = created_epoch(&meta);

    Some(EntryMetadata {
        size: Some(meta.len()),
        modified_readable: modified_raw.and_then(format_local),
        modified_raw,
        created_readable: created_raw.and_then(format_local),
        created_raw,
    })
}

/// Fractional epoch seconds; negative for pre-epoch timestamps.
fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}

/// Creation time on Unix: status-change time (`st_ctime`).
#[cfg(unix)]
fn created_epoch(meta: &fs::Metadata) -> Option<f64> {
    use std::os::unix::fs::MetadataExt;
    Some(meta.ctime() as f64 + meta.ctime_nsec() as f64 / 1e9)
}

/// Creation time elsewhere: the filesystem's birth time, when it has one.
#[cfg(not(unix))]
fn created_epoch(meta: &fs::Metadata) -> Option<f64> {
    meta.created().ok().map(epoch_seconds)
}

/// Render a raw epoch value as `YYYY-MM-DD HH-MM-SS` local time.
///
/// Returns `None` for values chrono cannot represent (far out of range,
/// NaN after a corrupt stat); the caller keeps the raw value either way.
pub fn format_local(raw: f64) -> Option<String> {
    if !raw.is_finite() {
        return None;
    }
    let secs = raw.floor() as i64;
    let nanos = ((raw - secs as f64) * 1e9) as u32;
    match Local.timestamp_opt(secs, nanos.min(999_999_999)) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            Some(dt.format(READABLE_FORMAT).to_string())
        }
        LocalResult::None => None,
    }
}
