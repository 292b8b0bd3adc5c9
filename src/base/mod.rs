//! Foundation types for the declaration model.
//!
//! - [`SourceLocation`] - file, byte offset, 1-based line/column
//! - [`SourceSpan`] - a start/end pair of locations
//!
//! This module has NO dependencies on other declgraph modules.

mod position;

pub use position::{SourceLocation, SourceSpan};
