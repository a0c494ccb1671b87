//! splitrs
//!
//! Streaming separator splitting for Rust.
//!
//! `splitrs` reads a byte stream one byte at a time and cuts it wherever an
//! arbitrary multi-byte separator appears. It is meant for files that are too
//! large, or too awkward, to load wholesale:
//!
//! - line- or record-oriented logs
//! - `\0`- or `\x1e`-delimited dumps
//! - any format where a fixed byte sequence marks the end of a record
//!
//! The crate intentionally:
//! - does NOT decode text (separators are raw bytes)
//! - does NOT seek or re-read input
//! - does NOT manage concurrency
//!
//! It also ships the small error-aware [`fold`] combinators the drivers are
//! built on, and the [`seq`] helpers behind the suffix match.
//!
//! # Callback
//!
//! ```no_run
//! use splitrs::{split_file, SplitConfig, SplitError};
//!
//! fn main() -> Result<(), SplitError> {
//!     let config = SplitConfig::with_separator("\r\n")?;
//!
//!     split_file("data.txt", &config, |record| {
//!         println!("record {} bytes", record.len());
//!         Ok::<_, std::io::Error>(())
//!     })?;
//!     Ok(())
//! }
//! ```
//!
//! # Iterator
//!
//! ```no_run
//! use splitrs::{SplitConfig, SplitIter};
//!
//! # fn main() -> Result<(), splitrs::SplitError> {
//! for record in SplitIter::open("data.txt", SplitConfig::with_separator("\n")?)? {
//!     let record = record?;
//!     println!("record {} bytes", record.len());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod splitter;

pub mod fold;
pub mod seq;
pub mod util;

//
// Public surface
//

pub use config::{DEFAULT_BUFFER_CAPACITY, EmptyChunks, Separator, SplitConfig};
pub use error::{BoxError, Result, SplitError};
pub use splitter::{
    SplitIter, SplitSummary, Splitter, iterate_bytes, iterate_file_bytes, split_file, split_reader,
};
