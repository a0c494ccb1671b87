//! Byte-at-a-time drivers: read a source to EOF and feed a [`Splitter`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bytes::Bytes;
use tracing::{debug, trace, warn};

use super::Splitter;
use crate::config::SplitConfig;
use crate::error::{BoxError, Result, SplitError};
use crate::fold::for_each_err;

/// Totals for one completed split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Number of chunks handed to the sink.
    pub chunks: usize,
    /// Number of bytes read from the source, separators included.
    pub bytes: u64,
}

/// Opens `path` for reading, tagging failures with the path.
pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| SplitError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `reader` to EOF one byte at a time, calling `f` for every byte.
///
/// Stops at the first read error or the first error from `f`. Returns the
/// number of bytes consumed.
fn drive<R, F>(reader: BufReader<R>, mut f: F) -> Result<u64>
where
    R: Read,
    F: FnMut(u8) -> Result<()>,
{
    let mut consumed = 0u64;
    for_each_err(reader.bytes(), |byte, _| {
        let byte = byte?;
        consumed += 1;
        f(byte)
    })?;
    Ok(consumed)
}

/// Calls `f` for every byte of `reader`, in order, through a buffered reader.
///
/// Errors returned by `f` abort the loop and come back as
/// [`SplitError::Sink`]. Returns the number of bytes read.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let mut upper = Vec::new();
/// let n = splitrs::iterate_bytes(Cursor::new("abc"), |b| {
///     upper.push(b.to_ascii_uppercase());
///     Ok::<_, std::convert::Infallible>(())
/// })?;
/// assert_eq!(n, 3);
/// assert_eq!(upper, b"ABC");
/// # Ok::<(), splitrs::SplitError>(())
/// ```
pub fn iterate_bytes<R, E, F>(reader: R, mut f: F) -> Result<u64>
where
    R: Read,
    E: Into<BoxError>,
    F: FnMut(u8) -> Result<(), E>,
{
    drive(BufReader::new(reader), |byte| f(byte).map_err(SplitError::sink))
}

/// Opens `path` and calls `f` for every byte of the file.
///
/// The file handle is closed on every exit path.
pub fn iterate_file_bytes<P, E, F>(path: P, f: F) -> Result<u64>
where
    P: AsRef<Path>,
    E: Into<BoxError>,
    F: FnMut(u8) -> Result<(), E>,
{
    iterate_bytes(open(path.as_ref())?, f)
}

/// Splits `reader` on the configured separator, handing each chunk to `sink`.
///
/// Chunks arrive in stream order, without the separator. Adjacent separators
/// yield an empty chunk unless the config says to skip them. At EOF any
/// non-empty remainder is delivered as a final chunk.
///
/// A read error or a sink error stops the split immediately; chunks already
/// delivered stay delivered and no trailing chunk is emitted.
pub fn split_reader<R, E, F>(reader: R, config: &SplitConfig, mut sink: F) -> Result<SplitSummary>
where
    R: Read,
    E: Into<BoxError>,
    F: FnMut(Bytes) -> Result<(), E>,
{
    config.validate()?;

    let mut splitter = Splitter::new(config.clone());
    let mut chunks = 0usize;
    let mut deliver = |chunk: Bytes| -> Result<()> {
        trace!(index = chunks, len = chunk.len(), "chunk");
        let res = sink(chunk).map_err(SplitError::sink);
        if let Err(err) = &res {
            warn!(index = chunks, error = %err, "sink rejected chunk");
        } else {
            chunks += 1;
        }
        res
    };

    let reader = BufReader::with_capacity(config.buffer_capacity(), reader);
    let bytes = drive(reader, |byte| match splitter.push_byte(byte) {
        Some(chunk) => deliver(chunk),
        None => Ok(()),
    })?;

    if let Some(rest) = splitter.finish() {
        deliver(rest)?;
    }

    Ok(SplitSummary { chunks, bytes })
}

/// Opens `path` and splits it with [`split_reader`].
///
/// # Example
///
/// ```no_run
/// use splitrs::{split_file, SplitConfig};
///
/// let config = SplitConfig::with_separator("\n")?;
/// let summary = split_file("access.log", &config, |line| {
///     println!("{} bytes", line.len());
///     Ok::<_, std::io::Error>(())
/// })?;
/// println!("{} lines", summary.chunks);
/// # Ok::<(), splitrs::SplitError>(())
/// ```
pub fn split_file<P, E, F>(path: P, config: &SplitConfig, sink: F) -> Result<SplitSummary>
where
    P: AsRef<Path>,
    E: Into<BoxError>,
    F: FnMut(Bytes) -> Result<(), E>,
{
    let path = path.as_ref();
    config.validate()?;
    let file = open(path)?;
    debug!(
        path = %path.display(),
        separator_len = config.separator().len(),
        "splitting file"
    );

    let summary = split_reader(file, config, sink)?;
    debug!(
        path = %path.display(),
        chunks = summary.chunks,
        bytes = summary.bytes,
        "split finished"
    );
    Ok(summary)
}
