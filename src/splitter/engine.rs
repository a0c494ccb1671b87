//! Core splitting engine - Splitter with streaming API.
//!
//! [`Splitter`] is a push-based state machine: feed it bytes, get back the
//! chunks whose terminating separator has been seen. It never reads input on
//! its own; the drivers in this module's siblings do that.
//!
//! - `push_byte()` - Feed a single byte
//! - `push()` - Feed a slice of any size
//! - `finish()` - Flush the trailing partial chunk when input ends
//!
//! # Example
//!
//! ```
//! use splitrs::{Separator, SplitConfig, Splitter};
//!
//! let mut splitter = Splitter::new(SplitConfig::new(Separator::from_static(b"::")));
//!
//! let mut chunks = splitter.push(b"ab::c");
//! chunks.extend(splitter.push(b":d:"));
//! chunks.extend(splitter.finish());
//!
//! assert_eq!(chunks, vec![&b"ab"[..], &b"c:d:"[..]]);
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use crate::config::{EmptyChunks, SplitConfig};
use crate::seq::ends_with;

/// A splitter that turns a byte stream into separator-delimited chunks.
///
/// # Ownership
///
/// Every chunk is split off the internal accumulator and frozen into an owned
/// [`Bytes`]. The accumulator starts over empty after each emission, so a
/// chunk handed out never aliases storage that later bytes are written to.
/// Callers may keep chunks for as long as they want.
///
/// A chunk shares its allocation with whatever spare capacity the accumulator
/// had when it was split off, so holding on to one short chunk keeps that
/// whole block alive. Copy it with [`Bytes::copy_from_slice`] before storing
/// it long term if memory matters.
///
/// # States
///
/// The splitter is *accumulating* until [`Splitter::finish`] is called, which
/// emits the remainder (if non-empty) and returns it to a fresh state ready for
/// another stream.
#[derive(Debug)]
pub struct Splitter {
    config: SplitConfig,
    buf: BytesMut,
    offset: u64,
}

impl Splitter {
    /// Creates a new splitter with the given configuration.
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            buf: BytesMut::new(),
            offset: 0,
        }
    }

    /// Appends one byte and returns the completed chunk, if the accumulator
    /// now ends with the separator.
    ///
    /// The returned chunk excludes the separator and may be empty when two
    /// separators are adjacent (unless [`EmptyChunks::Skip`] is configured).
    #[inline]
    pub fn push_byte(&mut self, byte: u8) -> Option<Bytes> {
        self.buf.put_u8(byte);

        if !ends_with(&self.buf[..], self.config.separator().as_bytes()) {
            return None;
        }

        let mut chunk = self.buf.split();
        self.offset += chunk.len() as u64;
        chunk.truncate(chunk.len() - self.config.separator().len());

        if chunk.is_empty() && self.config.empty_chunks() == EmptyChunks::Skip {
            return None;
        }
        Some(chunk.freeze())
    }

    /// Pushes a slice and returns every chunk completed by it, in order.
    ///
    /// Bytes after the last separator stay pending for the next call.
    pub fn push(&mut self, data: &[u8]) -> Vec<Bytes> {
        data.iter().filter_map(|&b| self.push_byte(b)).collect()
    }

    /// Finalizes the stream and returns the trailing partial chunk if any.
    ///
    /// Returns `None` when nothing is pending, including when the input ended
    /// exactly on a separator. The splitter is reset afterwards.
    pub fn finish(&mut self) -> Option<Bytes> {
        let rest = self.buf.split();
        self.offset = 0;
        if rest.is_empty() {
            None
        } else {
            Some(rest.freeze())
        }
    }

    /// Resets the splitter state for a new stream, discarding pending bytes.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.offset = 0;
    }

    /// Returns the stream offset where the pending (unterminated) chunk starts.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the number of bytes waiting for a separator.
    pub fn pending_len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the configuration used by this splitter.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }
}
