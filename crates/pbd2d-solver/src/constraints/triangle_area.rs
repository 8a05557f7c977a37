//! Triangle area constraints.
//!
//! Keeps twice the signed area of each triangle at its rest value.
//! The sign is kept: a constraint built from a clockwise triangle drives
//! the triangle back to clockwise.

use pbd2d_math::geometry::{signed_area2, signed_area2_gradients};
use pbd2d_math::Vec2;
use pbd2d_mesh::Triangle;
use pbd2d_types::constants::DEGENERATE_AREA_THRESHOLD;
use pbd2d_types::{IndexedVec, Pbd2dError, Pbd2dResult, PointId};
use serde::{Deserialize, Serialize};

use crate::constraints::ConstraintParams;
use crate::state::PointState;
use crate::strategy::ConstraintSolver;

/// A single area constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleAreaConstraint {
    pub triangle: Triangle,
    /// Twice the signed rest area.
    pub rest_area2: f32,
    pub lambda: f32,
}

impl TriangleAreaConstraint {
    /// Creates a constraint; a zero rest area is a configuration error.
    pub fn new(triangle: Triangle, rest_area2: f32) -> Pbd2dResult<Self> {
        if !(rest_area2.abs() > DEGENERATE_AREA_THRESHOLD) || !rest_area2.is_finite() {
            return Err(Pbd2dError::InvalidConstraint(format!(
                "Triangle {:?} has degenerate rest area {rest_area2:e}",
                triangle.points()
            )));
        }
        Ok(Self {
            triangle,
            rest_area2,
            lambda: 0.0,
        })
    }
}

/// All triangle area constraints of one body.
#[derive(Debug, Clone)]
pub struct TriangleAreaConstraints {
    pub params: ConstraintParams,
    pub constraints: Vec<TriangleAreaConstraint>,
}

impl TriangleAreaConstraints {
    pub fn new(
        params: ConstraintParams,
        constraints: Vec<TriangleAreaConstraint>,
    ) -> Pbd2dResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            constraints,
        })
    }

    /// Captures the rest area of every triangle from `positions`.
    pub fn from_triangles<'a>(
        triangles: impl IntoIterator<Item = &'a Triangle>,
        positions: &IndexedVec<PointId, Vec2>,
        params: ConstraintParams,
    ) -> Pbd2dResult<Self> {
        let constraints = triangles
            .into_iter()
            .map(|t| TriangleAreaConstraint::new(*t, t.signed_area2(positions)))
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

impl ConstraintSolver for TriangleAreaConstraints {
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
            let ids = constraint.triangle.points();
            let [p0, p1, p2] = ids.map(|i| positions[i]);
            let grads = signed_area2_gradients(p0, p1, p2);
            let c = signed_area2(p0, p1, p2) - constraint.rest_area2;

            let w_sum: f32 = ids
                .iter()
                .zip(grads.iter())
                .map(|(&i, g)| masses_inv[i] * g.length_squared())
                .sum();
            let Some(dlambda) = params.delta_lambda(c, constraint.lambda, w_sum, dt) else {
                continue;
            };
            constraint.lambda += dlambda;
            for (&i, g) in ids.iter().zip(grads.iter()) {
                positions[i] += masses_inv[i] * dlambda * *g;
            }
        }
    }

    fn name(&self) -> &str {
        "triangle_area"
    }
}
