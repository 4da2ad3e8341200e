//! Data model for DiskKeeper snapshots.
//!
//! Re-exports the volume descriptors and the entry record / scan result
//! types that flow through the pipeline.

pub mod record;
pub mod volume;

pub use record::{EntryRecord, ScanResult};
pub use volume::{Volume, VolumeKind};
