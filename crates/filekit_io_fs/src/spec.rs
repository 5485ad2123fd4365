//! Option models, destination classification and error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Where a single-file copy writes its bytes.
///
/// Produced by [`crate::copy::resolve_copy_destination`]; exactly one variant
/// applies for a given destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCopyDestination {
    /// Destination is an existing regular file; truncate and overwrite it.
    ExistingFile(PathBuf),
    /// Destination is an existing directory; write `dir/<source basename>`.
    IntoDirectory(PathBuf),
    /// Destination is missing but its parent directory exists.
    NewFile(PathBuf),
}

impl EnumCopyDestination {
    /// Resolved file path the copy will open.
    pub fn path(&self) -> &Path {
        match self {
            Self::ExistingFile(p) | Self::IntoDirectory(p) | Self::NewFile(p) => p,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Metadata preservation switches for `copy_file_with_options`.
///
/// All switches are off by default: only the source permission bits are passed
/// as the creation mode, as with [`crate::copy::copy_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecCopyFileOptions {
    /// Re-apply source permissions after copy (not subject to umask).
    pub if_preserve_permissions: bool,
    /// Copy access and modification times.
    pub if_preserve_times: bool,
    /// Copy extended attributes where the platform supports them.
    pub if_preserve_xattrs: bool,
}

impl SpecCopyFileOptions {
    /// Preserve everything the crate knows how to preserve.
    pub fn preserve_all() -> Self {
        Self {
            if_preserve_permissions: true,
            if_preserve_times: true,
            if_preserve_xattrs: true,
        }
    }
}

/// One failed directory from a `mkdir_all` batch.
#[derive(Debug, Error)]
#[error("{}: {error}", .path.display())]
pub struct SpecMkdirError {
    /// Requested directory path.
    pub path: PathBuf,
    /// Underlying creation error.
    #[source]
    pub error: io::Error,
}

/// Errors returned by the line and copy helpers.
#[derive(Debug, Error)]
pub enum FsError {
    /// Open/read/write/stat failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Source and destination resolve to the same file-system entry.
    #[error("Source and destination are the same file: {} <-> {}", .src.display(), .dst.display())]
    SameFile {
        /// Source path as given.
        src: PathBuf,
        /// Destination path (after directory resolution).
        dst: PathBuf,
    },

    /// Source is a directory, device, socket or other non-regular entry.
    #[error("Non-regular source file {} ({kind}, mode {mode:o})", .path.display())]
    InvalidSourceType {
        /// Source path as given.
        path: PathBuf,
        /// File type name, e.g. `directory`.
        kind: &'static str,
        /// Raw mode bits (0 where the platform has none).
        mode: u32,
    },

    /// Neither the destination nor its parent directory exists.
    #[error("Destination path doesn't exist: {}", .0.display())]
    DestinationNotFound(PathBuf),

    /// Fewer bytes landed in the destination than the source reported.
    #[error("Short write to {}: wrote {written} of {expected} bytes", .path.display())]
    ShortWrite {
        /// Destination file.
        path: PathBuf,
        /// Bytes actually copied.
        written: u64,
        /// Source size at open time.
        expected: u64,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
