//! Small helpers that live next to the splitter but never feed into it.
//!
//! - [`fs`] - Path resolution, existence check, recursive store
//! - [`text`] - Whitespace trimming and domain suffix tests

pub mod fs;
pub mod text;
