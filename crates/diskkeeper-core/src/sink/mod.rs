//! Record sink — serializes a volume's record stream to its artifact.
//!
//! The artifact is a CSV with a fixed six-column header, string cells
//! quoted and numeric cells bare (empty cells render as quoted-empty
//! strings). With compression enabled the CSV becomes the single entry of
//! a deflate zip carrying the same base name, and the intermediate CSV is
//! removed. A scan that produced zero records persists nothing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::SnapshotError;
use crate::model::ScanResult;

/// A progress observation is logged every this many records written.
/// Advisory only; has no effect on correctness.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// How the sink persists artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinkConfig {
    /// Archive the CSV into a zip and delete the intermediate CSV.
    pub compress: bool,
}

/// Persist one volume's scan result into `work_dir`.
///
/// Returns the path of the finished artifact, or `Ok(None)` for an empty
/// result (nothing is written and nothing is left on disk). Placement of
/// the artifact into its final destination is the caller's concern.
pub fn persist(
    result: &ScanResult,
    work_dir: &Path,
    host: &str,
    config: &SinkConfig,
) -> Result<Option<PathBuf>, SnapshotError> {
    if result.is_empty() {
        info!(
            "no records for {} - nothing to persist",
            result.volume.root.display()
        );
        return Ok(None);
    }

    let base = result.base_name(host);
    let csv_path = work_dir.join(format!("{base}.csv"));

    if let Err(err) = write_csv(result, &csv_path) {
        // A partial artifact must not survive a failed write.
        let _ = fs::remove_file(&csv_path);
        return Err(err);
    }
    info!(
        "wrote {} records to {}",
        result.len(),
        csv_path.display()
    );

    if !config.compress {
        return Ok(Some(csv_path));
    }

    let zip_path = work_dir.join(format!("{base}.zip"));
    match archive_csv(&csv_path, &zip_path) {
        Ok(()) => {
            // The CSV was the intermediate form; only the zip is retained.
            fs::remove_file(&csv_path).map_err(|err| SnapshotError::Archive {
                path: csv_path.clone(),
                source: err.into(),
            })?;
            info!("archived to {}", zip_path.display());
            Ok(Some(zip_path))
        }
        Err(err) => {
            // Drop the partial zip; the CSV stays behind as discardable.
            let _ = fs::remove_file(&zip_path);
            Err(err)
        }
    }
}

/// Write the record stream as CSV with the fixed header.
pub(crate) fn write_csv(result: &ScanResult, path: &Path) -> Result<(), SnapshotError> {
    let fail = |source: csv::Error| SnapshotError::Serialize {
        path: path.to_path_buf(),
        source,
    };

    // Non-numeric quoting matches the artifact contract: paths and
    // readable timestamps quoted, sizes and raw timestamps bare.
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_path(path)
        .map_err(fail)?;

    let mut written: u64 = 0;
    for record in result.records() {
        writer.serialize(record).map_err(fail)?;
        written += 1;
        if written % PROGRESS_INTERVAL == 0 {
            info!("{:08} - {}", written, record.path);
        }
    }
    writer.flush().map_err(|err| fail(err.into()))?;
    Ok(())
}

/// Archive the CSV as the single entry of a deflate zip.
pub(crate) fn archive_csv(csv_path: &Path, zip_path: &Path) -> Result<(), SnapshotError> {
    let entry_name = csv_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot.csv".to_string());

    let run = || -> Result<(), zip::result::ZipError> {
        let file = fs::File::create(zip_path)?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(entry_name, options)?;
        let mut src = fs::File::open(csv_path)?;
        io::copy(&mut src, &mut zip)?;
        zip.finish()?;
        Ok(())
    };

    run().map_err(|source| SnapshotError::Archive {
        path: zip_path.to_path_buf(),
        source,
    })
}
