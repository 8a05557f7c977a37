//! Point state — per-point buffers of one body.
//!
//! This is the primary mutable data structure during simulation.
//! Every solver reads and writes these buffers for the duration of a
//! single call and never keeps a reference across calls.

use pbd2d_math::Vec2;
use pbd2d_types::{IndexedVec, Pbd2dError, Pbd2dResult, PointId};

/// Per-point simulation buffers.
///
/// All buffers have the same length and share the [`PointId`] space.
/// `positions` holds the state at the start of the current sub-step;
/// solvers move `predicted_positions`.
#[derive(Debug, Clone)]
pub struct PointState {
    pub positions: IndexedVec<PointId, Vec2>,
    pub predicted_positions: IndexedVec<PointId, Vec2>,
    pub velocities: IndexedVec<PointId, Vec2>,
    /// Inverse masses; `0.0` marks an immovable point.
    pub masses_inv: IndexedVec<PointId, f32>,
}

impl PointState {
    /// Initialize state from positions and inverse masses.
    ///
    /// Velocities start at zero; predictions start at the positions.
    pub fn new(positions: Vec<Vec2>, masses_inv: Vec<f32>) -> Pbd2dResult<Self> {
        if positions.len() != masses_inv.len() {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Inverse mass count ({}) != point count ({})",
                masses_inv.len(),
                positions.len()
            )));
        }
        if let Some((i, w)) = masses_inv
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
        {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Point {i} has invalid inverse mass {w}"
            )));
        }
        if let Some(i) = positions.iter().position(|p| !p.is_finite()) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Point {i} has a non-finite position"
            )));
        }

        let n = positions.len();
        let positions: IndexedVec<PointId, Vec2> = positions.into();
        Ok(Self {
            predicted_positions: positions.clone(),
            positions,
            velocities: IndexedVec::filled(Vec2::ZERO, n),
            masses_inv: masses_inv.into(),
        })
    }

    /// Initialize state with the same `mass` on every point.
    ///
    /// Points listed in `pinned` get `inv_mass = 0.0` (infinite mass).
    pub fn with_uniform_mass(
        positions: Vec<Vec2>,
        mass: f32,
        pinned: &[PointId],
    ) -> Pbd2dResult<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Point mass must be positive, got {mass}"
            )));
        }
        let mut masses_inv = vec![1.0 / mass; positions.len()];
        for &p in pinned {
            let slot = masses_inv.get_mut(p.index()).ok_or_else(|| {
                Pbd2dError::InvalidConfig(format!(
                    "Pinned point {p:?} is out of range (point count: {})",
                    positions.len()
                ))
            })?;
            *slot = 0.0;
        }
        Self::new(positions, masses_inv)
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    /// Compute predicted positions: `v += dt·f`, damped, then `p̃ = p + dt·v`.
    ///
    /// Immovable points keep zero velocity and predict their own position.
    pub fn predict(&mut self, dt: f32, external_force: Vec2, damping: f32) {
        let factor = (1.0 - damping * dt).max(0.0);
        for i in self.positions.ids() {
            if self.masses_inv[i] == 0.0 {
                self.velocities[i] = Vec2::ZERO;
                self.predicted_positions[i] = self.positions[i];
                continue;
            }
            let v = (self.velocities[i] + external_force * dt) * factor;
            self.velocities[i] = v;
            self.predicted_positions[i] = self.positions[i] + v * dt;
        }
    }

    /// Update velocities from the sub-step displacement,
    /// `v = (p̃ − p) / dt`, then commit `p = p̃`.
    pub fn update_velocities(&mut self, dt: f32) {
        let inv_dt = 1.0 / dt;
        for i in self.positions.ids() {
            self.velocities[i] = (self.predicted_positions[i] - self.positions[i]) * inv_dt;
        }
        self.positions.copy_from(&self.predicted_positions);
    }

    /// Overwrite predictions with the current positions.
    pub fn reset_predictions(&mut self) {
        self.predicted_positions.copy_from(&self.positions);
    }

    /// Compute total kinetic energy: 0.5 * Σ m_i * ||v_i||².
    pub fn kinetic_energy(&self) -> f64 {
        self.velocities
            .iter()
            .zip(self.masses_inv.iter())
            .filter(|(_, w)| **w > 0.0)
            .map(|(v, &w)| 0.5 * v.length_squared() as f64 / w as f64)
            .sum()
    }

    /// Mass-weighted sum of predicted positions over movable points.
    ///
    /// Useful for checking that a correction preserves momentum.
    pub fn predicted_mass_moment(&self) -> Vec2 {
        self.predicted_positions
            .iter()
            .zip(self.masses_inv.iter())
            .filter(|(_, w)| **w > 0.0)
            .map(|(p, &w)| *p / w)
            .sum()
    }
}
