//! DiskKeeper — volume inventory snapshots.
//!
//! Thin binary entry point: argument parsing, logging setup, the
//! per-volume pipeline loop, and placement of finished artifacts into the
//! output directory. All pipeline logic lives in `diskkeeper-core`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use diskkeeper_core::model::Volume;
use diskkeeper_core::platform;
use diskkeeper_core::scanner::{self, ScanConfig};
use diskkeeper_core::selector::{self, SelectorConfig};
use diskkeeper_core::sink::{self, SinkConfig};

/// Inventory the contents of storage volumes into CSV snapshot artifacts.
#[derive(Debug, Parser)]
#[command(name = "diskkeeper", version, about)]
struct Args {
    /// Directory that receives the finished snapshot artifacts.
    output_dir: PathBuf,

    /// Archive each CSV into a zip and remove the intermediate CSV.
    #[arg(short = 'z', long = "zip")]
    zip: bool,

    /// Include all fixed volumes.
    #[arg(long)]
    fixed: bool,

    /// Include all removable volumes.
    #[arg(long)]
    removable: bool,

    /// Include all network volumes.
    #[arg(long)]
    network: bool,

    /// Scan ONLY this volume, ignoring the category flags.
    #[arg(long)]
    volume: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    info!("DiskKeeper starting");
    info!("  output_dir = {}", args.output_dir.display());
    info!("  zip = {}", args.zip);
    info!(
        "  categories: fixed={} removable={} network={}",
        args.fixed, args.removable, args.network
    );
    match &args.volume {
        Some(v) => info!("  volume = {} (only this volume is scanned)", v.display()),
        None => info!("  volume = none"),
    }

    let selector_config = SelectorConfig {
        explicit_volume: args.volume.clone(),
        include_fixed: args.fixed,
        include_removable: args.removable,
        include_network: args.network,
    };

    // Configuration failures halt here, before any traversal.
    let volumes = selector::select_volumes(&selector_config)?;

    let host = platform::host_identifier();
    let scan_config = ScanConfig::default();
    let sink_config = SinkConfig { compress: args.zip };

    // Artifacts are assembled in the working directory and moved into the
    // output directory once finished, so a crashed run never leaves a
    // partial file at the destination.
    let work_dir = std::env::current_dir().context("cannot resolve working directory")?;

    for volume in &volumes {
        if let Err(err) = run_volume(volume, &scan_config, &sink_config, &work_dir, &host, &args) {
            // Volume-level fault isolation: one bad volume never stops the rest.
            error!("snapshot of {} failed: {err:#}", volume.root.display());
        }
    }

    info!("all volumes processed");
    Ok(())
}

/// Scan one volume, persist its artifact, and move it to the output dir.
fn run_volume(
    volume: &Volume,
    scan_config: &ScanConfig,
    sink_config: &SinkConfig,
    work_dir: &Path,
    host: &str,
    args: &Args,
) -> anyhow::Result<()> {
    info!("scanning volume {}", volume.root.display());
    let result = scanner::scan_volume(volume, scan_config);
    info!(
        "collected {} records from {}",
        result.len(),
        volume.root.display()
    );

    match sink::persist(&result, work_dir, host, sink_config)? {
        Some(artifact) => {
            let dest = place_artifact(&artifact, &args.output_dir)?;
            info!("artifact saved to {}", dest.display());
        }
        None => info!("nothing to save for {}", volume.root.display()),
    }
    Ok(())
}

/// Move a finished artifact into the output directory.
///
/// `rename` fails across filesystems; fall back to copy-then-remove.
fn place_artifact(artifact: &Path, output_dir: &Path) -> anyhow::Result<PathBuf> {
    let file_name = artifact
        .file_name()
        .context("artifact path has no file name")?;
    let dest = output_dir.join(file_name);

    if fs::rename(artifact, &dest).is_err() {
        fs::copy(artifact, &dest)
            .with_context(|| format!("cannot copy artifact to {}", dest.display()))?;
        fs::remove_file(artifact)
            .with_context(|| format!("cannot remove intermediate {}", artifact.display()))?;
    }
    Ok(dest)
}
