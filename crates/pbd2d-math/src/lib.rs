//! # pbd2d-math
//!
//! Linear algebra and geometry primitives for the pbd2d engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Mat2`)
//! - [`Complex`] — unit rotor for 2D rotations
//! - Geometry kernels: signed triangle area and its gradient,
//!   closest points between two segments, segment bounds
//! - 2×2 polar rotation extraction and guarded inversion

pub mod complex;
pub mod decomposition;
pub mod geometry;

pub use complex::Complex;

// Re-export glam types as the canonical math types for pbd2d.
pub use glam::{Mat2, Vec2};
