//! Permission constants and the process-wide defaults value.

use once_cell::sync::OnceCell;

/// Default mode for created directories (`rwxr-xr-x`).
pub const MODE_DIR_DEFAULT: u32 = 0o755;
/// Default mode for created files (`rw-r--r--`).
pub const MODE_FILE_DEFAULT: u32 = 0o644;

/// Permission bits applied when a directory or file is created without an
/// explicit mode. Only honored on unix; the process umask still applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecFsDefaults {
    /// Mode for directories created by [`crate::dir::mkdir_all`].
    pub mode_dir: u32,
    /// Mode for files created by [`crate::lines::write_lines`] and friends.
    pub mode_file: u32,
}

impl Default for SpecFsDefaults {
    fn default() -> Self {
        Self {
            mode_dir: MODE_DIR_DEFAULT,
            mode_file: MODE_FILE_DEFAULT,
        }
    }
}

static FS_DEFAULTS: OnceCell<SpecFsDefaults> = OnceCell::new();

/// Install process-wide defaults.
///
/// Succeeds only once, and only before the first [`fs_defaults`] read.
/// Otherwise returns the value already in effect.
pub fn init_fs_defaults(spec_defaults: SpecFsDefaults) -> Result<(), SpecFsDefaults> {
    _init_in(&FS_DEFAULTS, spec_defaults)
}

/// Read the process-wide defaults, falling back to [`SpecFsDefaults::default`].
pub fn fs_defaults() -> &'static SpecFsDefaults {
    FS_DEFAULTS.get_or_init(SpecFsDefaults::default)
}

fn _init_in(
    cell: &OnceCell<SpecFsDefaults>,
    spec_defaults: SpecFsDefaults,
) -> Result<(), SpecFsDefaults> {
    cell.set(spec_defaults).map_err(|_| {
        cell.get()
            .copied()
            .unwrap_or_else(SpecFsDefaults::default)
    })
}
