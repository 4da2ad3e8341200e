//! Volume selection — resolves the set of volumes a scan invocation will
//! cover, before any traversal begins.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::info;

use crate::error::SnapshotError;
use crate::model::{Volume, VolumeKind};
use crate::platform;

/// Which volumes a scan invocation should cover.
///
/// An explicit volume always wins; otherwise the enabled categories are
/// matched against the host's volume list.
#[derive(Debug, Clone, Default)]
pub struct SelectorConfig {
    /// Restrict the scan to this single volume, ignoring category flags.
    pub explicit_volume: Option<PathBuf>,
    pub include_fixed: bool,
    pub include_removable: bool,
    pub include_network: bool,
}

impl SelectorConfig {
    fn any_category(&self) -> bool {
        self.include_fixed || self.include_removable || self.include_network
    }

    fn includes(&self, kind: VolumeKind) -> bool {
        match kind {
            VolumeKind::Fixed => self.include_fixed,
            VolumeKind::Removable => self.include_removable,
            VolumeKind::Network => self.include_network,
            VolumeKind::Unknown => false,
        }
    }
}

/// Resolve the ordered, deduplicated list of volumes to scan.
///
/// Fails with [`SnapshotError::NoScanTargets`] when nothing is selected or
/// the selected categories match no host volume — the run halts before any
/// traversal.
pub fn select_volumes(config: &SelectorConfig) -> Result<Vec<Volume>, SnapshotError> {
    resolve(config, platform::enumerate_volumes())
}

/// Category filtering and deduplication, split from host enumeration so it
/// can be exercised against synthetic volume lists.
pub fn resolve(
    config: &SelectorConfig,
    candidates: Vec<Volume>,
) -> Result<Vec<Volume>, SnapshotError> {
    if let Some(root) = &config.explicit_volume {
        // The explicit volume is taken as-is; its category is never checked.
        info!("explicit volume selected: {}", root.display());
        return Ok(vec![Volume::new(root.clone(), VolumeKind::Unknown)]);
    }

    if !config.any_category() {
        return Err(SnapshotError::NoScanTargets);
    }

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let volumes: Vec<Volume> = candidates
        .into_iter()
        .filter(|v| config.includes(v.kind))
        .filter(|v| seen.insert(v.root.clone()))
        .collect();

    if volumes.is_empty() {
        return Err(SnapshotError::NoScanTargets);
    }

    for v in &volumes {
        info!("volume selected: {} ({})", v.root.display(), v.kind.label());
    }
    Ok(volumes)
}
