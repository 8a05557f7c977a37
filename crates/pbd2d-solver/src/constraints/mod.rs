//! XPBD constraint kinds.
//!
//! Every constraint record stores its immutable rest value next to the
//! Lagrange multiplier it accumulates during a sub-step. The update
//! shared by all kinds is
//!
//! ```text
//! α̃  = compliance / dt²
//! Δλ = (−C·stiffness − α̃·λ) / (Σ wᵢ·|∇ᵢC|² + α̃)
//! pᵢ += wᵢ·Δλ·∇ᵢC
//! ```

pub mod edge_length;
pub mod shape_matching;
pub mod triangle_area;

use pbd2d_types::{Pbd2dError, Pbd2dResult};
use serde::{Deserialize, Serialize};

/// Stiffness and compliance shared by a set of constraints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintParams {
    /// Fraction of the error corrected per pass, in `[0, 1]`.
    pub stiffness: f32,
    /// Inverse stiffness; `0.0` is rigid.
    pub compliance: f32,
}

impl Default for ConstraintParams {
    fn default() -> Self {
        Self {
            stiffness: 1.0,
            compliance: 0.0,
        }
    }
}

impl ConstraintParams {
    pub fn new(stiffness: f32, compliance: f32) -> Pbd2dResult<Self> {
        let params = Self {
            stiffness,
            compliance,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Pbd2dResult<()> {
        if !(0.0..=1.0).contains(&self.stiffness) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Stiffness must lie in [0, 1], got {}",
                self.stiffness
            )));
        }
        if !(self.compliance >= 0.0 && self.compliance.is_finite()) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Compliance must be non-negative, got {}",
                self.compliance
            )));
        }
        Ok(())
    }

    /// Time-scaled compliance `α̃ = compliance / dt²`.
    #[inline]
    pub fn alpha_tilde(&self, dt: f32) -> f32 {
        self.compliance / (dt * dt)
    }

    /// Multiplier increment for error `c`, accumulated multiplier `lambda`
    /// and generalized inverse mass `w_sum`.
    ///
    /// Returns `None` when `dt` is not a positive finite duration, or when
    /// the denominator vanishes (all points immovable on a rigid
    /// constraint).
    #[inline]
    pub fn delta_lambda(&self, c: f32, lambda: f32, w_sum: f32, dt: f32) -> Option<f32> {
        if !(dt > 0.0 && dt.is_finite()) {
            return None;
        }
        let alpha = self.alpha_tilde(dt);
        let denom = w_sum + alpha;
        if !(denom > 0.0) {
            return None;
        }
        Some((-c * self.stiffness - alpha * lambda) / denom)
    }
}
