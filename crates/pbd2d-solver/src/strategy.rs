//! Constraint solver trait — one XPBD projection pass.
//!
//! The step driver calls these methods in order, once per sub-step:
//!
//! ```text
//! solver.reset_multipliers();
//! solver.project(state, dt);
//! ```
//!
//! Each pass runs sequentially over its constraints (Gauss-Seidel
//! order); the accumulated multiplier assumes that order.

use crate::state::PointState;

/// A set of constraints that can be projected onto a body's points.
pub trait ConstraintSolver {
    /// Zero every Lagrange multiplier. Called at the start of each sub-step.
    fn reset_multipliers(&mut self);

    /// Run one projection pass over `state.predicted_positions`.
    ///
    /// `dt` is the sub-step duration, validated positive by the
    /// configuration.
    fn project(&mut self, state: &mut PointState, dt: f32);

    /// Returns the solver's name.
    fn name(&self) -> &str;
}
