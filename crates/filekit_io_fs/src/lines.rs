//! Line-oriented reading and writing.
//!
//! Reading is split between a producer thread that scans the byte source and
//! the consumer iterating a [`LineStream`]. The two meet on a zero-capacity
//! channel, so at most one line is in flight: the producer blocks after each
//! line until the consumer takes it.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::thread::{self, JoinHandle};

use crate::conf::fs_defaults;
use crate::spec::FsError;
use crate::util::open_truncate_with_mode;

////////////////////////////////////////////////////////////////////////////////
// #region LineStream

/// Lazy, finite, single-pass sequence of lines from a byte source.
///
/// Lines have their `\n` (and a preceding `\r`) stripped. A final fragment
/// without terminator is yielded as the last line; invalid UTF-8 is replaced
/// lossily.
///
/// The source is owned and closed by the producer thread, which happens once
/// the last line was taken or the stream is dropped. Dropping the stream
/// early cancels the producer at its next hand-off. A producer stuck inside a
/// `read` that never returns cannot be interrupted.
#[derive(Debug)]
pub struct LineStream {
    rx_lines: Receiver<String>,
    handle_producer: Option<JoinHandle<()>>,
}

impl LineStream {
    fn spawn<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        let (tx_lines, rx_lines) = sync_channel::<String>(0);
        let handle_producer = thread::spawn(move || produce_lines(reader, tx_lines));
        Self {
            rx_lines,
            handle_producer: Some(handle_producer),
        }
    }

    /// Stop consuming; the producer releases its source at the next hand-off.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Iterator for LineStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.rx_lines.recv() {
            Ok(line) => Some(line),
            Err(_) => {
                // Producer is done and has already dropped its source.
                if let Some(handle) = self.handle_producer.take() {
                    if handle.join().is_err() {
                        tracing::warn!("line producer thread panicked");
                    }
                }
                None
            }
        }
    }
}

fn produce_lines<R: Read>(reader: R, tx_lines: SyncSender<String>) {
    let mut reader = BufReader::new(reader);
    let mut buf_line = Vec::new();
    let mut n_lines: u64 = 0;

    loop {
        buf_line.clear();
        match reader.read_until(b'\n', &mut buf_line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!("line stream stopped after {n_lines} lines: {e}");
                break;
            }
        }

        let line = String::from_utf8_lossy(strip_line_terminator(&buf_line)).into_owned();
        if tx_lines.send(line).is_err() {
            tracing::debug!("line stream consumer went away after {n_lines} lines");
            break;
        }
        n_lines += 1;
    }

    // Close the source before the consumer can observe end-of-stream.
    drop(reader);
    drop(tx_lines);
}

fn strip_line_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Stream lines from an already opened source.
pub fn read_file_line_by_line<R>(reader: R) -> LineStream
where
    R: Read + Send + 'static,
{
    LineStream::spawn(reader)
}

/// Open `path` and stream its lines.
///
/// Fails before any line is produced if the file cannot be opened.
pub fn read_line_by_line<P: AsRef<Path>>(path: P) -> Result<LineStream, FsError> {
    let file = File::open(path.as_ref())?;
    Ok(LineStream::spawn(file))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Collect

/// Read every line of the file at `path`.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FsError> {
    Ok(read_line_by_line(path)?.collect())
}

/// Read every line of an already opened source.
pub fn read_file_lines<R>(reader: R) -> Vec<String>
where
    R: Read + Send + 'static,
{
    read_file_line_by_line(reader).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Write

/// Write each line followed by `\n` through a buffered writer, then flush.
///
/// Stops at the first failed write; the sink keeps whatever was written.
pub fn write_file_lines<W, S>(writer: W, lines: &[S]) -> Result<(), FsError>
where
    W: Write,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Create or truncate `path` with the default file mode and write `lines`.
pub fn write_lines<P, S>(path: P, lines: &[S]) -> Result<(), FsError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let file = open_truncate_with_mode(path.as_ref(), fs_defaults().mode_file)?;
    write_file_lines(file, lines)
}

/// Create or truncate `path` with the default file mode and write `content`.
pub fn write_string<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FsError> {
    let mut file = open_truncate_with_mode(path.as_ref(), fs_defaults().mode_file)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
