//! Position query tests
//!
//! Tests for:
//! - Locating the statement under a cursor
//! - Identifier extraction
//! - Alias extraction
//! - Node chains at a position
