//! Coulomb friction helpers shared by the contact solvers.

use pbd2d_math::Vec2;
use pbd2d_types::constants::EPSILON;

/// Component of `delta` orthogonal to the unit `normal`.
#[inline]
pub fn tangential(delta: Vec2, normal: Vec2) -> Vec2 {
    delta - normal * delta.dot(normal)
}

/// Friction multiplier for a tangential slip of length `slip`.
///
/// The multiplier that cancels the slip is `slip / w_sum`; static
/// friction applies it in full, kinetic friction is capped at
/// `mu·normal_lambda`.
#[inline]
pub fn coulomb_clamp(slip: f32, w_sum: f32, mu: f32, normal_lambda: f32) -> f32 {
    (slip / w_sum).min(mu * normal_lambda)
}

/// Unit slip direction and its length, or `None` for no slip.
#[inline]
pub fn slip_direction(tangential: Vec2) -> Option<(Vec2, f32)> {
    let len = tangential.length();
    (len > EPSILON).then(|| (tangential / len, len))
}
