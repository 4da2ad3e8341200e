//! Volume descriptors — a mounted storage root plus its category.
//!
//! Resolved once per scan invocation and never mutated afterwards.

use std::path::PathBuf;

/// Category of a mounted volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    Fixed,
    Removable,
    Network,
    Unknown,
}

impl VolumeKind {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Removable => "Removable",
            Self::Network => "Network",
            Self::Unknown => "Unknown",
        }
    }
}

/// A single volume to scan: its root path and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Mount point path, e.g. `C:\` or `/mnt/data`.
    pub root: PathBuf,
    /// Volume category.
    pub kind: VolumeKind,
}

impl Volume {
    pub fn new(root: impl Into<PathBuf>, kind: VolumeKind) -> Self {
        Self {
            root: root.into(),
            kind,
        }
    }

    /// The component this volume contributes to artifact file names.
    ///
    /// Drive-letter roots collapse to the bare letter (`C:\` → `C`); other
    /// mount paths are flattened by replacing separators (`/mnt/data` →
    /// `mnt-data`). The filesystem root itself becomes `root`.
    pub fn letter_or_root(&self) -> String {
        let raw = self.root.to_string_lossy();
        let trimmed = raw.trim_end_matches(['\\', '/']);
        if trimmed.len() == 2 && trimmed.ends_with(':') {
            return trimmed[..1].to_string();
        }
        let flattened = trimmed
            .trim_start_matches(['\\', '/'])
            .replace(['\\', '/'], "-");
        if flattened.is_empty() {
            "root".to_string()
        } else {
            flattened
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_letter_root_collapses_to_letter() {
        let v = Volume::new("C:\\", VolumeKind::Fixed);
        assert_eq!(v.letter_or_root(), "C");
        let v = Volume::new("D:", VolumeKind::Removable);
        assert_eq!(v.letter_or_root(), "D");
    }

    #[test]
    fn filesystem_root_becomes_root() {
        let v = Volume::new("/", VolumeKind::Fixed);
        assert_eq!(v.letter_or_root(), "root");
    }

    #[test]
    fn mount_path_is_flattened() {
        let v = Volume::new("/mnt/data", VolumeKind::Network);
        assert_eq!(v.letter_or_root(), "mnt-data");
        let v = Volume::new("/media/usb0/", VolumeKind::Removable);
        assert_eq!(v.letter_or_root(), "media-usb0");
    }

    #[test]
    fn kind_labels() {
        assert_eq!(VolumeKind::Fixed.label(), "Fixed");
        assert_eq!(VolumeKind::Network.label(), "Network");
    }
}
