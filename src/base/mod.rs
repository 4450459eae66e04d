//! Foundation types for sqlfold.
//!
//! This module provides the primitives every other layer builds on:
//! - [`Position`], [`Span`] - Line/column positions for tokens and nodes
//! - [`TextRange`], [`TextSize`] - Byte offsets into the parsed buffer
//!
//! This module has NO dependencies on other sqlfold modules.

mod position;

pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
