//! Entry records and per-volume scan results.
//!
//! Every filesystem node enumerated by the walker becomes exactly one
//! [`EntryRecord`], even when every metadata field failed to resolve.
//! Field absence is modelled with `Option`, never with sentinel values:
//! an absent field serializes as an empty CSV cell.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::model::Volume;

/// Captured metadata for one filesystem node.
///
/// Serde renames produce the fixed artifact header; struct field order is
/// the artifact column order. `is_dir` is carried in memory for analysis
/// and tests but omitted from the artifact.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    /// Absolute path, unique within one volume scan.
    #[serde(rename = "Filename")]
    pub path: String,

    /// Whether the node is a directory. Not serialized.
    #[serde(skip)]
    pub is_dir: bool,

    /// Byte count; `None` when the stat failed.
    #[serde(rename = "Filesize")]
    pub size: Option<u64>,

    /// Last-modified time as fractional epoch seconds.
    #[serde(rename = "Modified Timestamp")]
    pub modified_raw: Option<f64>,

    /// Last-modified time as `YYYY-MM-DD HH-MM-SS` local time.
    /// `None` when the raw value was absent or unrepresentable.
    #[serde(rename = "Modified Readable")]
    pub modified_readable: Option<String>,

    /// Creation (Windows) / status-change (Unix) time as fractional
    /// epoch seconds.
    #[serde(rename = "Created Timestamp")]
    pub created_raw: Option<f64>,

    /// Creation time as `YYYY-MM-DD HH-MM-SS` local time.
    #[serde(rename = "Created Readable")]
    pub created_readable: Option<String>,
}

impl EntryRecord {
    /// A record whose stat failed entirely: path only, all metadata empty.
    pub fn empty(path: String, is_dir: bool) -> Self {
        Self {
            path,
            is_dir,
            size: None,
            modified_raw: None,
            modified_readable: None,
            created_raw: None,
            created_readable: None,
        }
    }
}

/// The ordered record stream produced by scanning one volume.
///
/// Created when traversal begins, grows by append, and is consumed by the
/// sink once the walk finishes.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The volume this result belongs to.
    pub volume: Volume,
    /// Wall-clock time the scan started; drives the artifact name.
    pub started_at: DateTime<Local>,
    records: Vec<EntryRecord>,
}

impl ScanResult {
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            started_at: Local::now(),
            records: Vec::new(),
        }
    }

    /// Append one record. Order of insertion is the artifact row order.
    pub fn push(&mut self, record: EntryRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[EntryRecord] {
        &self.records
    }

    /// Artifact base name: `{host}_{volumeLetterOrRoot}_{scanTimestamp}`.
    pub fn base_name(&self, host: &str) -> String {
        format!(
            "{}_{}_{}",
            host,
            self.volume.letter_or_root(),
            self.started_at.format("%Y_%m_%d_%H_%M_%S")
        )
    }
}
