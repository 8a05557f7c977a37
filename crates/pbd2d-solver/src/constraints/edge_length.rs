//! Edge length constraints.
//!
//! Keeps the distance between two points at its rest length.

use pbd2d_math::Vec2;
use pbd2d_mesh::Edge;
use pbd2d_types::{IndexedVec, Pbd2dError, Pbd2dResult, PointId};
use serde::{Deserialize, Serialize};

use crate::constraints::ConstraintParams;
use crate::state::PointState;
use crate::strategy::ConstraintSolver;

/// A single distance constraint between points `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeLengthConstraint {
    pub a: PointId,
    pub b: PointId,
    pub rest_length: f32,
    /// Accumulated Lagrange multiplier for the current sub-step.
    pub lambda: f32,
}

impl EdgeLengthConstraint {
    /// Creates a constraint; `rest_length` must be positive.
    pub fn new(a: PointId, b: PointId, rest_length: f32) -> Pbd2dResult<Self> {
        if !(rest_length > 0.0 && rest_length.is_finite()) {
            return Err(Pbd2dError::InvalidConstraint(format!(
                "Edge ({a:?}, {b:?}) needs a positive rest length, got {rest_length}"
            )));
        }
        Ok(Self {
            a,
            b,
            rest_length,
            lambda: 0.0,
        })
    }
}

/// All edge length constraints of one body.
#[derive(Debug, Clone)]
pub struct EdgeLengthConstraints {
    pub params: ConstraintParams,
    pub constraints: Vec<EdgeLengthConstraint>,
}

impl EdgeLengthConstraints {
    pub fn new(params: ConstraintParams, constraints: Vec<EdgeLengthConstraint>) -> Pbd2dResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            constraints,
        })
    }

    /// Builds one constraint per edge with the rest length taken from
    /// `positions`.
    pub fn from_edges<'a>(
        edges: impl IntoIterator<Item = &'a Edge>,
        positions: &IndexedVec<PointId, Vec2>,
        params: ConstraintParams,
    ) -> Pbd2dResult<Self> {
        let constraints = edges
            .into_iter()
            .map(|e| EdgeLengthConstraint::new(e.a, e.b, e.length(positions)))
            .collect::<Pbd2dResult<Vec<_>>>()?;
        Self::new(params, constraints)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl ConstraintSolver for EdgeLengthConstraints {
    fn reset_multipliers(&mut self) {
        for c in &mut self.constraints {
            c.lambda = 0.0;
        }
    }

    fn project(&mut self, state: &mut PointState, dt: f32) {
        let params = self.params;
        let positions = &mut state.predicted_positions;
        let masses_inv = &state.masses_inv;

        for constraint in &mut self.constraints {
            let (a, b) = (constraint.a, constraint.b);
            let (w_a, w_b) = (masses_inv[a], masses_inv[b]);
            let delta = positions[b] - positions[a];
            let length = delta.length();
            if length == 0.0 {
                // Gradient undefined.
                continue;
            }

            let c = length - constraint.rest_length;
            let grad = delta / length;
            let Some(dlambda) = params.delta_lambda(c, constraint.lambda, w_a + w_b, dt) else {
                continue;
            };
            constraint.lambda += dlambda;
            positions[a] -= w_a * dlambda * grad;
            positions[b] += w_b * dlambda * grad;
        }
    }

    fn name(&self) -> &str {
        "edge_length"
    }
}
