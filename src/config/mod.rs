//! Configuration for splitting behavior.
//!
//! This module provides types to configure how a byte stream is split:
//!
//! - [`Separator`] - The non-empty byte sequence chunks are delimited by
//! - [`SplitConfig`] - Separator plus reader options
//! - [`EmptyChunks`] - What to do with the empty chunk between adjacent separators
//!
//! # Example
//!
//! ```
//! use splitrs::{EmptyChunks, Separator, SplitConfig};
//!
//! // Split on CRLF, 64 KiB read buffer
//! let config = SplitConfig::new(Separator::new("\r\n")?)
//!     .with_buffer_capacity(64 * 1024);
//!
//! // Drop empty lines
//! let config = config.with_empty_chunks(EmptyChunks::Skip);
//!
//! # Ok::<(), splitrs::SplitError>(())
//! ```

use bytes::Bytes;

use crate::error::{Result, SplitError};

/// Default read buffer capacity (8 KiB).
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// A non-empty byte sequence that delimits chunks.
///
/// Matching is byte-exact: a text separator has to be supplied already
/// encoded. `&str` and `String` convert through their UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separator(Bytes);

impl Separator {
    /// Creates a separator, rejecting an empty sequence.
    pub fn new(bytes: impl Into<Bytes>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SplitError::InvalidConfig {
                message: "separator must not be empty",
            });
        }
        Ok(Self(bytes))
    }

    /// Creates a separator from a static byte string.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is empty.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        assert!(!bytes.is_empty(), "separator must not be empty");
        Self(Bytes::from_static(bytes))
    }

    /// Returns the separator bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the separator length in bytes (always at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with other byte containers.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for Separator {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&'static str> for Separator {
    type Error = SplitError;

    fn try_from(s: &'static str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<Vec<u8>> for Separator {
    type Error = SplitError;

    fn try_from(v: Vec<u8>) -> Result<Self> {
        Self::new(v)
    }
}

/// Policy for the empty chunk produced between two adjacent separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyChunks {
    /// Hand empty chunks to the sink like any other chunk.
    #[default]
    Deliver,
    /// Drop empty chunks; the separators are still consumed.
    Skip,
}

/// Configuration for separator splitting.
///
/// # Example
///
/// ```
/// use splitrs::{Separator, SplitConfig};
///
/// let config = SplitConfig::new(Separator::from_static(b","));
/// assert_eq!(config.separator().as_bytes(), b",");
/// assert_eq!(config.buffer_capacity(), splitrs::DEFAULT_BUFFER_CAPACITY);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitConfig {
    separator: Separator,
    buffer_capacity: usize,
    empty_chunks: EmptyChunks,
}

impl SplitConfig {
    /// Creates a configuration with default reader options.
    pub fn new(separator: Separator) -> Self {
        Self {
            separator,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            empty_chunks: EmptyChunks::default(),
        }
    }

    /// Shorthand for `SplitConfig::new(Separator::new(bytes)?)`.
    pub fn with_separator(bytes: impl Into<Bytes>) -> Result<Self> {
        Separator::new(bytes).map(Self::new)
    }

    /// Sets the read buffer capacity used by the file driver.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Sets the empty chunk policy.
    pub fn with_empty_chunks(mut self, policy: EmptyChunks) -> Self {
        self.empty_chunks = policy;
        self
    }

    /// Returns the separator.
    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    /// Returns the read buffer capacity.
    pub fn buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }

    /// Returns the empty chunk policy.
    pub fn empty_chunks(&self) -> EmptyChunks {
        self.empty_chunks
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity == 0 {
            return Err(SplitError::InvalidConfig {
                message: "buffer capacity must be non-zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_rejects_empty() {
        assert!(Separator::new(Vec::new()).is_err());
        assert!(Separator::new("").is_err());
        assert!(Separator::try_from("").is_err());
    }

    #[test]
    fn test_separator_bytes() {
        let sep = Separator::new("\r\n").unwrap();
        assert_eq!(sep.as_bytes(), b"\r\n");
        assert_eq!(sep.len(), 2);
        assert!(!sep.is_empty());
    }

    #[test]
    fn test_separator_multibyte_text_is_utf8() {
        let sep = Separator::try_from("→").unwrap();
        assert_eq!(sep.as_bytes(), "→".as_bytes());
        assert_eq!(sep.len(), 3);
    }

    #[test]
    #[should_panic(expected = "separator must not be empty")]
    fn test_separator_from_static_empty() {
        let _ = Separator::from_static(b"");
    }

    #[test]
    fn test_split_config_default() {
        let config = SplitConfig::new(Separator::from_static(b"\n"));
        assert_eq!(config.buffer_capacity(), DEFAULT_BUFFER_CAPACITY);
        assert_eq!(config.empty_chunks(), EmptyChunks::Deliver);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_split_config_builder() {
        let config = SplitConfig::with_separator(&b"||"[..])
            .unwrap()
            .with_buffer_capacity(16)
            .with_empty_chunks(EmptyChunks::Skip);
        assert_eq!(config.separator().as_bytes(), b"||");
        assert_eq!(config.buffer_capacity(), 16);
        assert_eq!(config.empty_chunks(), EmptyChunks::Skip);
    }

    #[test]
    fn test_split_config_validate() {
        let config = SplitConfig::new(Separator::from_static(b",")).with_buffer_capacity(0);
        assert!(config.validate().is_err());
    }
}
