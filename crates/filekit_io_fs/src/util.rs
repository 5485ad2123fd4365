use std::fs::{self, File, FileType, Metadata, OpenOptions};
use std::io;
use std::path::Path;

use crate::spec::SpecCopyFileOptions;

////////////////////////////////////////////////////////////////////////////////
// #region FileHandles

/// Open `path` for writing, creating it with `mode` or truncating it.
pub(crate) fn open_truncate_with_mode(path: &Path, mode: u32) -> io::Result<File> {
    let mut cfg_open = OpenOptions::new();
    cfg_open.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        cfg_open.mode(mode);
    }
    #[cfg(not(unix))]
    {
        let _ = mode;
    }
    cfg_open.open(path)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region MetadataHelpers

/// Full mode bits (type + permissions); 0 where the platform has none.
pub(crate) fn derive_mode_bits(meta: &Metadata) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        meta.mode()
    }
    #[cfg(not(unix))]
    {
        let _ = meta;
        0
    }
}

/// Permission bits only, suitable as a creation mode.
pub(crate) fn derive_permission_bits(meta: &Metadata) -> u32 {
    derive_mode_bits(meta) & 0o7777
}

pub(crate) fn describe_file_type(file_type: &FileType) -> &'static str {
    if file_type.is_file() {
        return "regular file";
    }
    if file_type.is_dir() {
        return "directory";
    }
    if file_type.is_symlink() {
        return "symlink";
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if file_type.is_fifo() {
            return "named pipe";
        }
        if file_type.is_socket() {
            return "socket";
        }
        if file_type.is_char_device() {
            return "character device";
        }
        if file_type.is_block_device() {
            return "block device";
        }
    }
    "special file"
}

/// Carry selected source metadata onto a freshly copied destination file.
pub(crate) fn apply_copy_metadata(
    meta_src: &Metadata,
    path_file_src: &Path,
    path_file_dst: &Path,
    spec_opts: &SpecCopyFileOptions,
) -> Result<(), io::Error> {
    if spec_opts.if_preserve_permissions {
        fs::set_permissions(path_file_dst, meta_src.permissions())?;
    }
    if spec_opts.if_preserve_times {
        use filetime::{FileTime, set_file_times};

        let file_time_access = FileTime::from_last_access_time(meta_src);
        let file_time_modify = FileTime::from_last_modification_time(meta_src);
        set_file_times(path_file_dst, file_time_access, file_time_modify)?;
    }
    if spec_opts.if_preserve_xattrs {
        copy_xattrs(path_file_src, path_file_dst);
    }
    Ok(())
}

#[cfg(unix)]
fn copy_xattrs(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("skip xattrs of {}: {e}", path_file_src.display());
            return;
        }
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        if let Err(e) = xattr::set(path_file_dst, &name, &raw_value) {
            tracing::debug!(
                "failed to set xattr {:?} on {}: {e}",
                name,
                path_file_dst.display()
            );
        }
    }
}

#[cfg(not(unix))]
fn copy_xattrs(_path_file_src: &Path, _path_file_dst: &Path) {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
