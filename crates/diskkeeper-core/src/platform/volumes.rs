//! Host volume enumeration.
//!
//! Windows queries the drive list and drive types directly through the
//! Win32 API; other platforms enumerate mounted disks via `sysinfo` and
//! classify them by filesystem name and removability.

use crate::model::{Volume, VolumeKind};

/// Enumerate all volumes visible to the host, with their categories.
///
/// Returns an empty vec if the host reports none (the selector turns that
/// into a configuration failure).
pub fn enumerate_volumes() -> Vec<Volume> {
    enumerate_impl()
}

#[cfg(windows)]
fn enumerate_impl() -> Vec<Volume> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use std::path::PathBuf;
    use windows::Win32::Storage::FileSystem::{GetDriveTypeW, GetLogicalDriveStringsW};

    // Drive type constants from the Windows API.
    const DRIVE_REMOVABLE_VAL: u32 = 2;
    const DRIVE_FIXED_VAL: u32 = 3;
    const DRIVE_REMOTE_VAL: u32 = 4;

    let mut volumes = Vec::new();

    // GetLogicalDriveStringsW returns null-separated drive root strings.
    let mut buffer = [0u16; 256];
    let len = unsafe { GetLogicalDriveStringsW(Some(&mut buffer)) };

    if len == 0 {
        tracing::warn!("GetLogicalDriveStringsW returned 0");
        return volumes;
    }

    let full = OsString::from_wide(&buffer[..len as usize]);
    let full_str = full.to_string_lossy();

    for root in full_str.split('\0').filter(|s| !s.is_empty()) {
        let root_wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();
        let root_pcwstr = windows::core::PCWSTR(root_wide.as_ptr());

        let raw_type = unsafe { GetDriveTypeW(root_pcwstr) };
        let kind = match raw_type {
            DRIVE_FIXED_VAL => VolumeKind::Fixed,
            DRIVE_REMOVABLE_VAL => VolumeKind::Removable,
            DRIVE_REMOTE_VAL => VolumeKind::Network,
            _ => VolumeKind::Unknown,
        };

        volumes.push(Volume::new(PathBuf::from(root), kind));
    }

    volumes
}

#[cfg(not(windows))]
fn enumerate_impl() -> Vec<Volume> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    disks
        .iter()
        .filter_map(|disk| {
            let mount = disk.mount_point().to_path_buf();
            if !mount.is_absolute() {
                return None;
            }
            let fs_name = disk.file_system().to_string_lossy().to_ascii_lowercase();
            let kind = if is_network_fs(&fs_name) {
                VolumeKind::Network
            } else if disk.is_removable() {
                VolumeKind::Removable
            } else {
                VolumeKind::Fixed
            };
            Some(Volume::new(mount, kind))
        })
        .collect()
}

/// Filesystem names that indicate a network-attached mount.
#[cfg(not(windows))]
fn is_network_fs(fs_name: &str) -> bool {
    const NETWORK_FS: &[&str] = &["nfs", "cifs", "smb", "smbfs", "sshfs", "fuse.sshfs", "9p", "afs"];
    NETWORK_FS.iter().any(|n| fs_name.starts_with(n))
}
