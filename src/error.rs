//! Error types for fugue-pref
//!
//! This module defines all error types used throughout the library.
//!
//! Inconsistent preference information is not an error: it is reported through
//! [`CandidateBundle::inconsistent`](crate::constructor::bundle::CandidateBundle) and
//! has to be handled by an [`InconsistencyHandler`](crate::consistency::InconsistencyHandler).
//! Running out of sampling attempts is likewise reported through the bundle statistics.

use thiserror::Error;

/// Error type for value model construction and evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Performance vector or weight vector has the wrong length
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Weights are negative, non-finite, or all zero
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Any other model parameter is out of its domain
    #[error("Invalid model parameter: {0}")]
    InvalidParameter(String),
}

/// Top-level error type for decision-making operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecisionError {
    /// A required input (model, context, candidate list) was absent
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Model error
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The history was emptied and the constructor still reported inconsistency
    #[error(
        "Degenerate model family: still inconsistent after removing all {removed} statement(s)"
    )]
    DegenerateModelFamily {
        /// Number of history entries removed before giving up
        removed: usize,
    },
}

/// Result type alias for decision-making operations
pub type DmResult<T> = Result<T, DecisionError>;
