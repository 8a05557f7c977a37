//! Contact response statistics.

use serde::{Deserialize, Serialize};

/// Summary of one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    /// Number of contacts resolved.
    pub resolved_count: u32,
    /// Deepest penetration found before correction.
    pub max_penetration: f32,
    /// Sum of normal multipliers applied.
    pub total_normal_correction: f32,
    /// Sum of friction multipliers applied.
    pub total_friction_correction: f32,
}

impl ContactResult {
    /// Accumulates `other` into `self`.
    pub fn merge(&mut self, other: &ContactResult) {
        self.resolved_count += other.resolved_count;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
        self.total_normal_correction += other.total_normal_correction;
        self.total_friction_correction += other.total_friction_correction;
    }
}
