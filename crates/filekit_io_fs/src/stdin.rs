//! Piped-input detection for the process's standard input.

use std::io;

/// `true` when stdin carries piped input rather than an interactive terminal.
///
/// Anything that is not a character device counts as piped (anonymous pipe,
/// named pipe, redirected file), as does a FIFO. Returns `false` when stdin
/// cannot be queried.
pub fn has_stdin() -> bool {
    match _stat_stdin() {
        Ok(b_piped) => b_piped,
        Err(e) => {
            tracing::debug!("stdin status query failed: {e}");
            false
        }
    }
}

#[cfg(unix)]
fn _stat_stdin() -> io::Result<bool> {
    use std::os::fd::AsFd;

    _stat_fd(io::stdin().as_fd())
}

#[cfg(unix)]
fn _stat_fd(fd: std::os::fd::BorrowedFd<'_>) -> io::Result<bool> {
    use std::fs::File;
    use std::os::unix::fs::FileTypeExt;

    // Query through a duplicate so closing it leaves the original fd open.
    let file_type = File::from(fd.try_clone_to_owned()?).metadata()?.file_type();
    Ok(_is_piped(file_type.is_char_device(), file_type.is_fifo()))
}

#[cfg(not(unix))]
fn _stat_stdin() -> io::Result<bool> {
    use std::io::IsTerminal;

    Ok(!io::stdin().is_terminal())
}

#[cfg_attr(not(unix), allow(dead_code))]
fn _is_piped(if_char_device: bool, if_fifo: bool) -> bool {
    !if_char_device || if_fifo
}
