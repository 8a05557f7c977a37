//! # pbd2d-types
//!
//! Shared types, identifiers, indexed buffers, error types and constants
//! for the pbd2d position-based dynamics engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other pbd2d crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod indexed;

pub use error::{Pbd2dError, Pbd2dResult};
pub use ids::{
    BodyId, CollidableEdgeId, EdgeId, ExternalEdgeId, Idx, PointId, TriangleId,
};
pub use indexed::IndexedVec;
