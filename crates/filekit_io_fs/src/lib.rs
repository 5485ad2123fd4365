//! `filekit_io_fs` v1:
//! Small, stateless file-system helpers.
//!
//! Modules:
//! - `conf`      : permission constants and process-wide defaults
//! - `spec`      : option models and errors
//! - `predicate` : existence/type/identity checks
//! - `dir`       : batch directory creation
//! - `lines`     : line streaming, collection and writing
//! - `copy`      : single-file copy
//! - `stdin`     : piped-stdin detection
//! - `util`      : shared helper functions

pub mod conf;
pub mod copy;
pub mod dir;
pub mod lines;
pub mod predicate;
pub mod spec;
pub mod stdin;
mod util;

pub use conf::{
    MODE_DIR_DEFAULT, MODE_FILE_DEFAULT, SpecFsDefaults, fs_defaults, init_fs_defaults,
};
pub use copy::{copy_file, copy_file_with_options, resolve_copy_destination};
pub use dir::mkdir_all;
pub use lines::{
    LineStream, read_file_line_by_line, read_file_lines, read_line_by_line, read_lines,
    write_file_lines, write_lines, write_string,
};
pub use predicate::{dir_exists, exists, file_exists, is_same_file};
pub use spec::{EnumCopyDestination, FsError, SpecCopyFileOptions, SpecMkdirError};
pub use stdin::has_stdin;
