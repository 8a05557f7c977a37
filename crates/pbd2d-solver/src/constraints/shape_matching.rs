//! Rigid shape matching.
//!
//! Pulls the body towards a rigidly transformed copy of its rest
//! shape (Müller et al., "Meshless Deformations Based on Shape
//! Matching"). One constraint per body.
//!
//! Per pass:
//! 1. Mass-weighted center of mass `c` of the predicted positions.
//! 2. Relative positions `pᵢ = xᵢ − c`.
//! 3. `Apq = Σ mᵢ pᵢ qᵢᵀ` against the rest relative positions `qᵢ`.
//! 4. `R` = rotational factor of `Apq`; `A = Apq · Aqq⁻¹`.
//! 5. Goal `gᵢ = c + (β·A + (1 − β)·R)·qᵢ`; `xᵢ += stiffness·(gᵢ − xᵢ)`.
//!
//! Immovable points carry no finite mass, so they are left out of the
//! sums and never moved.

use pbd2d_math::decomposition::{outer, polar_rotation, try_inverse};
use pbd2d_math::{Complex, Mat2, Vec2};
use pbd2d_types::constants::{EPSILON, SINGULAR_DETERMINANT_THRESHOLD};
use pbd2d_types::{IndexedVec, Pbd2dError, Pbd2dResult, PointId};
use serde::{Deserialize, Serialize};

use crate::state::PointState;
use crate::strategy::ConstraintSolver;

/// Shape matching parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMatchingParams {
    /// Fraction of the way each point moves to its goal, in `[0, 1]`.
    pub stiffness: f32,
    /// Blend between rigid (`0`) and linear (`1`) goal transforms.
    pub beta: f32,
}

impl Default for ShapeMatchingParams {
    fn default() -> Self {
        Self {
            stiffness: 1.0,
            beta: 0.0,
        }
    }
}

impl ShapeMatchingParams {
    pub fn validate(&self) -> Pbd2dResult<()> {
        if !(0.0..=1.0).contains(&self.stiffness) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Shape matching stiffness must lie in [0, 1], got {}",
                self.stiffness
            )));
        }
        if !(0.0..=1.0).contains(&self.beta) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Shape matching beta must lie in [0, 1], got {}",
                self.beta
            )));
        }
        Ok(())
    }
}

/// Shape matching constraint of one body.
#[derive(Debug, Clone)]
pub struct ShapeMatchingConstraint {
    params: ShapeMatchingParams,
    total_mass: f32,
    /// `qᵢ`: rest position minus rest center of mass.
    initial_relative_positions: IndexedVec<PointId, Vec2>,
    /// `(Σ mᵢ qᵢ qᵢᵀ)⁻¹`; `None` for a collinear rest shape.
    aqq_matrix: Option<Mat2>,

    // Scratch, rewritten by every pass.
    center_of_mass: Vec2,
    relative_positions: IndexedVec<PointId, Vec2>,
    apq_matrix: Mat2,
    a_matrix: Mat2,
    rotation: Complex,
}

impl ShapeMatchingConstraint {
    /// Captures the rest shape from `state.positions`.
    ///
    /// Fails if the body has no movable point.
    pub fn new(state: &PointState, params: ShapeMatchingParams) -> Pbd2dResult<Self> {
        params.validate()?;
        let (total_mass, rest_com) =
            weighted_center(&state.positions, &state.masses_inv).ok_or_else(|| {
                Pbd2dError::InvalidConstraint(
                    "Shape matching needs at least one movable point".into(),
                )
            })?;

        let initial_relative_positions: IndexedVec<PointId, Vec2> =
            state.positions.iter().map(|p| *p - rest_com).collect();

        let mut aqq = Mat2::ZERO;
        for (i, q) in initial_relative_positions.iter_enumerated() {
            let w = state.masses_inv[i];
            if w > 0.0 {
                aqq += outer(*q, *q) * (1.0 / w);
            }
        }
        let aqq_matrix = try_inverse(aqq, SINGULAR_DETERMINANT_THRESHOLD);
        if aqq_matrix.is_none() {
            tracing::warn!(
                points = state.point_count(),
                "collinear rest shape; shape matching falls back to pure rotation"
            );
        }

        let n = state.point_count();
        Ok(Self {
            params,
            total_mass,
            initial_relative_positions,
            aqq_matrix,
            center_of_mass: rest_com,
            relative_positions: IndexedVec::filled(Vec2::ZERO, n),
            apq_matrix: Mat2::ZERO,
            a_matrix: Mat2::IDENTITY,
            rotation: Complex::IDENTITY,
        })
    }

    pub fn params(&self) -> ShapeMatchingParams {
        self.params
    }

    /// Sum of the finite point masses.
    pub fn total_mass(&self) -> f32 {
        self.total_mass
    }

    pub fn initial_relative_positions(&self) -> &IndexedVec<PointId, Vec2> {
        &self.initial_relative_positions
    }

    pub fn aqq_matrix(&self) -> Option<Mat2> {
        self.aqq_matrix
    }

    /// Center of mass found by the last pass.
    pub fn center_of_mass(&self) -> Vec2 {
        self.center_of_mass
    }

    pub fn relative_positions(&self) -> &IndexedVec<PointId, Vec2> {
        &self.relative_positions
    }

    pub fn apq_matrix(&self) -> Mat2 {
        self.apq_matrix
    }

    /// Linear best-fit transform `Apq · Aqq⁻¹` from the last pass.
    pub fn a_matrix(&self) -> Mat2 {
        self.a_matrix
    }

    /// Best-fit rotation from the last pass.
    pub fn rotation(&self) -> Complex {
        self.rotation
    }
}

impl ConstraintSolver for ShapeMatchingConstraint {
    /// Shape matching carries no multiplier.
    fn reset_multipliers(&mut self) {}

    fn project(&mut self, state: &mut PointState, _dt: f32) {
        let positions = &mut state.predicted_positions;
        let masses_inv = &state.masses_inv;

        let Some((_, com)) = weighted_center(positions, masses_inv) else {
            return;
        };
        self.center_of_mass = com;

        let mut apq = Mat2::ZERO;
        for i in positions.ids() {
            let p = positions[i] - com;
            self.relative_positions[i] = p;
            let w = masses_inv[i];
            if w > 0.0 {
                apq += outer(p, self.initial_relative_positions[i]) * (1.0 / w);
            }
        }
        self.apq_matrix = apq;
        self.rotation = polar_rotation(apq, EPSILON);

        let rotation = self.rotation.to_mat2();
        let goal_transform = match self.aqq_matrix {
            Some(aqq) => {
                self.a_matrix = apq * aqq;
                self.a_matrix * self.params.beta + rotation * (1.0 - self.params.beta)
            }
            None => {
                self.a_matrix = rotation;
                rotation
            }
        };

        let stiffness = self.params.stiffness;
        for i in positions.ids() {
            if masses_inv[i] == 0.0 {
                continue;
            }
            let goal = com + goal_transform * self.initial_relative_positions[i];
            let current = positions[i];
            positions[i] += stiffness * (goal - current);
        }
    }

    fn name(&self) -> &str {
        "shape_matching"
    }
}

/// Total finite mass and mass-weighted center of `positions`.
///
/// Returns `None` if every point is immovable.
fn weighted_center(
    positions: &IndexedVec<PointId, Vec2>,
    masses_inv: &IndexedVec<PointId, f32>,
) -> Option<(f32, Vec2)> {
    let mut total = 0.0_f32;
    let mut moment = Vec2::ZERO;
    for (p, &w) in positions.iter().zip(masses_inv.iter()) {
        if w > 0.0 {
            let m = 1.0 / w;
            total += m;
            moment += *p * m;
        }
    }
    (total > 0.0).then(|| (total, moment / total))
}
