//! End-to-end pipeline integration tests.
//!
//! These exercise the real `scan_volume` → `persist` path against a real
//! temporary filesystem: traversal, exclusion pruning, metadata capture,
//! CSV serialization, and zip archiving, with zero mocking.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use diskkeeper_core::model::{ScanResult, Volume, VolumeKind};
use diskkeeper_core::scanner::{scan_volume, ScanConfig};
use diskkeeper_core::sink::{persist, SinkConfig};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Create a reproducible directory tree:
///
/// ```text
/// root/
///   alpha/
///     a.txt   (100 bytes)
///     b.rs    (200 bytes)
///   beta/
///     c.png   (300 bytes)
///   d.zip     (400 bytes)
/// ```
///
/// 4 files + 2 directories = 6 nodes under the root.
fn build_test_tree(root: &Path) {
    let alpha = root.join("alpha");
    let beta = root.join("beta");
    fs::create_dir_all(&alpha).unwrap();
    fs::create_dir_all(&beta).unwrap();

    write_bytes(&alpha.join("a.txt"), 100);
    write_bytes(&alpha.join("b.rs"), 200);
    write_bytes(&beta.join("c.png"), 300);
    write_bytes(&root.join("d.zip"), 400);
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

fn scan(root: &Path) -> ScanResult {
    let volume = Volume::new(root, VolumeKind::Fixed);
    scan_volume(&volume, &ScanConfig::default())
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// One record per node under the root; the root itself is not recorded.
#[test]
fn scan_records_every_node_exactly_once() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let result = scan(tmp.path());
    assert_eq!(result.len(), 6, "4 files + 2 dirs expected");

    let files: Vec<_> = result.records().iter().filter(|r| !r.is_dir).collect();
    let dirs: Vec<_> = result.records().iter().filter(|r| r.is_dir).collect();
    assert_eq!(files.len(), 4);
    assert_eq!(dirs.len(), 2);

    // Successful stats: size and both timestamp pairs present.
    for rec in files {
        assert!(rec.size.is_some(), "{} has no size", rec.path);
        assert!(rec.modified_raw.is_some());
        assert!(rec.modified_readable.is_some());
        assert!(rec.created_raw.is_some());
        assert!(rec.created_readable.is_some());
    }
}

/// `a.txt` (10 bytes) next to `$RECYCLE.BIN/b.txt` (5 bytes) yields
/// exactly one record, for `a.txt`, size 10.
#[test]
fn recycle_bin_subtree_is_fully_excluded() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join("a.txt"), 10);
    let recycle = tmp.path().join("$RECYCLE.BIN");
    fs::create_dir(&recycle).unwrap();
    write_bytes(&recycle.join("b.txt"), 5);

    let result = scan(tmp.path());
    assert_eq!(result.len(), 1);
    let rec = &result.records()[0];
    assert!(rec.path.ends_with("a.txt"));
    assert_eq!(rec.size, Some(10));
}

/// All three default exclusion names prune; a custom config can disable
/// pruning entirely.
#[test]
fn exclusion_set_is_configuration_not_global_state() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    for name in ["$RECYCLE.BIN", "$Recycle.Bin", "System Volume Information"] {
        let d = tmp.path().join(name);
        fs::create_dir(&d).unwrap();
        write_bytes(&d.join("x.dat"), 1);
    }
    write_bytes(&tmp.path().join("keep.txt"), 1);

    let volume = Volume::new(tmp.path(), VolumeKind::Fixed);
    let default_scan = scan_volume(&volume, &ScanConfig::default());
    assert_eq!(default_scan.len(), 1);

    let no_exclusions = ScanConfig {
        excluded_dirs: Default::default(),
    };
    let full_scan = scan_volume(&volume, &no_exclusions);
    // 3 dirs + 3 files + keep.txt.
    assert_eq!(full_scan.len(), 7);
}

/// End-to-end without compression: artifact exists, parses back to the
/// same rows in the same order.
#[test]
fn pipeline_produces_parseable_csv_artifact() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());
    let work = TempDir::new().expect("failed to create work dir");

    let result = scan(tmp.path());
    let artifact = persist(&result, work.path(), "testhost", &SinkConfig::default())
        .expect("persist failed")
        .expect("artifact expected for non-empty scan");

    let mut reader = csv::Reader::from_path(&artifact).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), result.len());
    for (row, rec) in rows.iter().zip(result.records()) {
        assert_eq!(&row[0], rec.path.as_str());
    }
}

/// End-to-end with compression: only the zip remains, and its single
/// entry holds the full CSV.
#[test]
fn pipeline_zip_artifact_replaces_csv() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());
    let work = TempDir::new().expect("failed to create work dir");

    let result = scan(tmp.path());
    let artifact = persist(&result, work.path(), "testhost", &SinkConfig { compress: true })
        .expect("persist failed")
        .expect("artifact expected");
    assert_eq!(artifact.extension().unwrap(), "zip");

    let remaining: Vec<_> = fs::read_dir(work.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(remaining, vec![artifact.clone()], "intermediate CSV must be deleted");

    let mut archive = zip::ZipArchive::new(fs::File::open(&artifact).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);
    let mut text = String::new();
    archive.by_index(0).unwrap().read_to_string(&mut text).unwrap();
    // Header plus one line per record.
    assert_eq!(text.lines().count(), 1 + result.len());
    assert!(text.starts_with("\"Filename\""));
}

/// An empty or completely excluded root leaves nothing on disk.
#[test]
fn empty_scan_leaves_no_artifact() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let recycle = tmp.path().join("$RECYCLE.BIN");
    fs::create_dir(&recycle).unwrap();
    write_bytes(&recycle.join("only.txt"), 5);
    let work = TempDir::new().expect("failed to create work dir");

    let result = scan(tmp.path());
    assert!(result.is_empty());

    let out = persist(&result, work.path(), "testhost", &SinkConfig { compress: true })
        .expect("persist failed");
    assert!(out.is_none());
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

/// A node whose stat fails still produces a record with its path and all
/// metadata fields empty, and the artifact renders those fields as empty
/// cells.
#[cfg(unix)]
#[test]
fn failed_stat_record_survives_to_the_artifact() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&tmp.path().join("ok.txt"), 7);
    std::os::unix::fs::symlink(
        tmp.path().join("never-existed"),
        tmp.path().join("broken"),
    )
    .unwrap();
    let work = TempDir::new().expect("failed to create work dir");

    let result = scan(tmp.path());
    assert_eq!(result.len(), 2);
    let broken = result
        .records()
        .iter()
        .find(|r| r.path.ends_with("broken"))
        .expect("record for the dangling symlink must exist");
    assert!(broken.size.is_none());
    assert!(broken.modified_raw.is_none());

    let artifact = persist(&result, work.path(), "testhost", &SinkConfig::default())
        .unwrap()
        .unwrap();
    let mut reader = csv::Reader::from_path(&artifact).unwrap();
    let row = reader
        .records()
        .map(|r| r.unwrap())
        .find(|r| r[0].ends_with("broken"))
        .unwrap();
    for cell in 1..6 {
        assert_eq!(&row[cell], "", "metadata cell {cell} must be empty");
    }
}

/// `PROGRESS_INTERVAL` must stay positive or the modulo in the sink's
/// write loop would panic. Compile-time invariant.
const _: () = assert!(diskkeeper_core::sink::PROGRESS_INTERVAL > 0);

/// Scanning the same tree twice produces independent results; nothing is
/// merged or reused across invocations.
#[test]
fn repeated_scans_are_independent() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_test_tree(tmp.path());

    let first = scan(tmp.path());
    write_bytes(&tmp.path().join("late.bin"), 50);
    let second = scan(tmp.path());

    assert_eq!(first.len(), 6);
    assert_eq!(second.len(), 7);
}
