//! Separator splitting for byte streams.
//!
//! - [`Splitter`] - Stateful engine with `push_byte()`/`push()`/`finish()` API
//! - [`SplitIter`] - Iterator that yields chunks from a [`std::io::Read`] source
//! - [`split_file`] / [`split_reader`] - Callback drivers that read to EOF
//! - [`iterate_bytes`] / [`iterate_file_bytes`] - Raw per-byte drivers

mod driver;
mod engine;
mod iter;

pub use driver::{SplitSummary, iterate_bytes, iterate_file_bytes, split_file, split_reader};
pub use engine::Splitter;
pub use iter::SplitIter;
