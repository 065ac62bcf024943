//! Error types for unitgraph operations.
//!
//! Every error is local to the query that produced it: the graph and any
//! derived structures stay valid for subsequent queries. An unreachable
//! shortest-path target is *not* an error; it is reported as
//! [`Distance::Infinite`](crate::analysis::Distance::Infinite).

use crate::domain::UnitId;
use std::io;
use thiserror::Error;

/// The error type for unitgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The dependency dump could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Every node was excluded from root selection (or the graph is empty).
    #[error("No root available: the graph has no eligible start unit")]
    NoRootAvailable,

    /// A requested root or target does not exist in the graph.
    #[error("Unit not found in graph: {0}")]
    MissingNode(UnitId),
}

/// A specialized Result type for unitgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
