//! Pull-based splitting: [`SplitIter`] yields chunks from a [`std::io::Read`].

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use bytes::Bytes;
use tracing::debug;

use super::Splitter;
use super::driver::open;
use crate::config::SplitConfig;
use crate::error::{Result, SplitError};

/// Iterator that lazily reads from a source and yields separator-delimited
/// chunks.
///
/// Yields the same chunk sequence as [`crate::split_reader`]. After the first
/// error the iterator is fused and returns `None`.
///
/// # Example
///
/// ```
/// use splitrs::{Separator, SplitConfig, Splitter};
/// use std::io::Cursor;
///
/// let splitter = Splitter::new(SplitConfig::new(Separator::from_static(b"\n")));
/// let lines: Vec<_> = splitter
///     .split(Cursor::new("one\ntwo\nthree"))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(lines, vec!["one", "two", "three"]);
/// # Ok::<(), splitrs::SplitError>(())
/// ```
#[derive(Debug)]
pub struct SplitIter<R> {
    bytes: io::Bytes<BufReader<R>>,
    splitter: Splitter,
    done: bool,
}

impl<R: Read> SplitIter<R> {
    /// Creates an iterator over `reader` driven by `splitter`.
    ///
    /// Any bytes already pending in `splitter` are discarded.
    pub fn new(reader: R, mut splitter: Splitter) -> Self {
        splitter.reset();
        // A zero capacity is rejected by `SplitConfig::validate`; here it
        // falls back to unit-sized reads.
        let capacity = splitter.config().buffer_capacity().max(1);
        Self {
            bytes: BufReader::with_capacity(capacity, reader).bytes(),
            splitter,
            done: false,
        }
    }
}

impl SplitIter<File> {
    /// Opens `path` and returns an iterator over its chunks.
    pub fn open(path: impl AsRef<Path>, config: SplitConfig) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;
        let file = open(path)?;
        debug!(path = %path.display(), "iterating file chunks");
        Ok(Self::new(file, Splitter::new(config)))
    }
}

impl<R: Read> Iterator for SplitIter<R> {
    type Item = Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for byte in self.bytes.by_ref() {
            match byte {
                Ok(b) => {
                    if let Some(chunk) = self.splitter.push_byte(b) {
                        return Some(Ok(chunk));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(SplitError::Io(e)));
                }
            }
        }

        self.done = true;
        self.splitter.finish().map(Ok)
    }
}

impl<R: Read> std::iter::FusedIterator for SplitIter<R> {}

impl Splitter {
    /// Consumes the splitter and returns an iterator over the chunks of
    /// `reader`.
    pub fn split<R: Read>(self, reader: R) -> SplitIter<R> {
        SplitIter::new(reader, self)
    }
}
