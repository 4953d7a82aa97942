//! Defines the error types for grid construction and benchmarking.
use crate::engine::PropagationError;
use thiserror::Error;

/// Rejected configurations. All of these are precondition violations on
/// static input: retrying cannot succeed, so none of them is recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("initial layer is empty")]
    EmptyInitialLayer,
    #[error("width sequence is empty")]
    EmptyWidthSequence,
    #[error("width sequence entry {position} is zero; widths must be >= 1")]
    InvalidWidth { position: usize },
    #[error("propagation failed: {0}")]
    Propagation(#[from] PropagationError),
}
