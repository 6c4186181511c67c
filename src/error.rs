// src/error.rs

use thiserror::Error;

use crate::node::NodeId;

/// Result type alias using IndexError.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors raised by the index core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// A node id that was never saved. Always a logic defect, never retried.
    #[error("Node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("Invalid tree order {order} (min {min})")]
    InvalidOrder { order: usize, min: usize },
}

/// Errors raised while running a command script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Invalid input file: expected FLH/<order> header, got {0:?}")]
    MissingHeader(String),

    #[error("Invalid argument on line {line}: {text:?}")]
    InvalidArgument { line: usize, text: String },

    #[error(transparent)]
    Index(#[from] IndexError),
}
