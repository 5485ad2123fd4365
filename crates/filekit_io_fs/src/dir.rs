//! Batch directory creation.

use std::fs::DirBuilder;
use std::io;
use std::path::Path;

#[cfg(unix)]
use crate::conf::fs_defaults;
use crate::spec::SpecMkdirError;

/// Recursively create every directory in `paths`, parents included.
///
/// Each path is attempted independently in input order with the default
/// directory mode; already existing directories are not an error. Every
/// failure is collected, one [`SpecMkdirError`] per failed path, and returned.
/// An empty result means all paths exist as directories. Nothing is rolled
/// back.
pub fn mkdir_all<I, P>(paths: I) -> Vec<SpecMkdirError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut cfg_builder = DirBuilder::new();
    cfg_builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        cfg_builder.mode(fs_defaults().mode_dir);
    }

    let mut l_errors = Vec::new();
    for path in paths {
        let path_dir = path.as_ref();
        let res_create = if path_dir.as_os_str().is_empty() {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot create directory from empty path",
            ))
        } else {
            cfg_builder.create(path_dir)
        };
        if let Err(e) = res_create {
            tracing::warn!("failed to create directory {}: {e}", path_dir.display());
            l_errors.push(SpecMkdirError {
                path: path_dir.to_path_buf(),
                error: e,
            });
        }
    }
    l_errors
}
