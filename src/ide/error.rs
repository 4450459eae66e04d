//! Error types for position queries.

use thiserror::Error;

use crate::base::Position;

/// Errors a position query can report.
///
/// Parsing itself never fails; only a query with nothing to answer from does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The document has no statements, so no position can resolve.
    #[error("no statement found at {0}")]
    NoStatement(Position),
}
