//! # pbd2d-solver
//!
//! Point state, simulation configuration and XPBD constraint solvers.
//!
//! ## Key Types
//!
//! - [`PointState`] — per-point buffers (positions, predictions, velocities, inverse masses)
//! - [`SimulationConfig`] — step driver configuration
//! - [`ConstraintSolver`] — one XPBD projection pass over a constraint set
//! - [`EdgeLengthConstraints`], [`TriangleAreaConstraints`],
//!   [`ShapeMatchingConstraint`] — the shipped constraint kinds

pub mod config;
pub mod constraints;
pub mod state;
pub mod strategy;

pub use config::SimulationConfig;
pub use constraints::edge_length::{EdgeLengthConstraint, EdgeLengthConstraints};
pub use constraints::shape_matching::{ShapeMatchingConstraint, ShapeMatchingParams};
pub use constraints::triangle_area::{TriangleAreaConstraint, TriangleAreaConstraints};
pub use constraints::ConstraintParams;
pub use state::PointState;
pub use strategy::ConstraintSolver;
