//! DiskKeeper Core — volume snapshot pipeline.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! The pipeline runs one volume at a time, fully synchronously:
//! volume selection → tree walk → metadata capture → artifact serialization.
//!
//! # Modules
//!
//! - [`model`] — Volumes, entry records, and per-volume scan results.
//! - [`selector`] — Resolving the set of volumes to scan.
//! - [`scanner`] — Tree traversal and per-entry metadata collection.
//! - [`sink`] — CSV serialization and optional zip archiving.
//! - [`platform`] — Host volume enumeration and host identification.

pub mod error;
pub mod model;
pub mod platform;
pub mod scanner;
pub mod selector;
pub mod sink;

pub use error::SnapshotError;
