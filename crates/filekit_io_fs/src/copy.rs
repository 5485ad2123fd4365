//! Single-file copy with destination classification.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::predicate::{dir_exists, file_exists, is_same_file};
use crate::spec::{EnumCopyDestination, FsError, SpecCopyFileOptions};
use crate::util::{
    apply_copy_metadata, derive_mode_bits, derive_permission_bits, describe_file_type,
    open_truncate_with_mode,
};

/// Decide where a copy of `src` to `dst` lands.
///
/// Checked in order, first match wins:
/// 1. `dst` is an existing regular file.
/// 2. `dst` is an existing directory; target is `dst/<basename of src>`.
/// 3. `dst` is missing but its parent directory exists.
///
/// Otherwise fails with [`FsError::DestinationNotFound`]. Nothing is created.
pub fn resolve_copy_destination<P, Q>(src: P, dst: Q) -> Result<EnumCopyDestination, FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_src = src.as_ref();
    let path_dst = dst.as_ref();

    if file_exists(path_dst) {
        return Ok(EnumCopyDestination::ExistingFile(path_dst.to_path_buf()));
    }
    if dir_exists(path_dst) {
        let Some(name_src) = path_src.file_name() else {
            return Err(FsError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Source path has no file name: {}", path_src.display()),
            )));
        };
        return Ok(EnumCopyDestination::IntoDirectory(path_dst.join(name_src)));
    }
    if dir_exists(_derive_parent_dir(path_dst)) {
        return Ok(EnumCopyDestination::NewFile(path_dst.to_path_buf()));
    }
    Err(FsError::DestinationNotFound(path_dst.to_path_buf()))
}

fn _derive_parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Copy the bytes of regular file `src` to `dst`.
///
/// See [`copy_file_with_options`]; no metadata beyond the creation mode is
/// carried over.
pub fn copy_file<P, Q>(src: P, dst: Q) -> Result<u64, FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    copy_file_with_options(src, dst, &SpecCopyFileOptions::default())
}

/// Copy the bytes of regular file `src` to `dst`, returning the byte count.
///
/// Fails, without touching any file, when:
/// - `src` and `dst` are the same file ([`FsError::SameFile`]),
/// - `src` cannot be opened ([`FsError::Io`]),
/// - `src` is not a regular file ([`FsError::InvalidSourceType`]),
/// - neither `dst` nor its parent exists ([`FsError::DestinationNotFound`]).
///
/// The destination is resolved by [`resolve_copy_destination`] and opened
/// with create + truncate, using the source permission bits as creation mode.
/// Once opened it stays truncated even if the byte copy fails later. A copy
/// that moves fewer bytes than the source size reported at open time fails
/// with [`FsError::ShortWrite`].
pub fn copy_file_with_options<P, Q>(
    src: P,
    dst: Q,
    spec_opts: &SpecCopyFileOptions,
) -> Result<u64, FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_src = src.as_ref();
    let path_dst = dst.as_ref();

    if is_same_file(path_src, path_dst) {
        return Err(FsError::SameFile {
            src: path_src.to_path_buf(),
            dst: path_dst.to_path_buf(),
        });
    }

    let mut file_src = File::open(path_src)?;
    let meta_src = file_src.metadata()?;
    if !meta_src.is_file() {
        return Err(FsError::InvalidSourceType {
            path: path_src.to_path_buf(),
            kind: describe_file_type(&meta_src.file_type()),
            mode: derive_mode_bits(&meta_src),
        });
    }

    let enum_dst = resolve_copy_destination(path_src, path_dst)?;
    let path_file_dst: PathBuf = enum_dst.path().to_path_buf();
    if is_same_file(path_src, &path_file_dst) {
        return Err(FsError::SameFile {
            src: path_src.to_path_buf(),
            dst: path_file_dst,
        });
    }
    tracing::debug!(
        "copy {} -> {} ({:?})",
        path_src.display(),
        path_file_dst.display(),
        enum_dst
    );

    let mut file_dst = open_truncate_with_mode(&path_file_dst, derive_permission_bits(&meta_src))?;
    let n_written = io::copy(&mut file_src, &mut file_dst)?;
    let n_expected = meta_src.len();
    if n_written != n_expected {
        return Err(FsError::ShortWrite {
            path: path_file_dst,
            written: n_written,
            expected: n_expected,
        });
    }
    drop(file_dst);

    apply_copy_metadata(&meta_src, path_src, &path_file_dst, spec_opts)?;
    Ok(n_written)
}
