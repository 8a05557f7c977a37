//! Error types for the pbd2d engine.
//!
//! All crates return `Pbd2dResult<T>` from fallible operations.
//! Only configuration problems surface as errors; numerical
//! degeneracies are absorbed by the solvers themselves.

use thiserror::Error;

use crate::ids::BodyId;

/// Unified error type for the pbd2d engine.
#[derive(Debug, Error)]
pub enum Pbd2dError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A constraint could not be built from the supplied geometry.
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// A body handle does not refer to a live body.
    #[error("Unknown body: {0:?}")]
    UnknownBody(BodyId),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, Pbd2dError>`.
pub type Pbd2dResult<T> = Result<T, Pbd2dError>;
