//! 2×2 matrix helpers for shape matching.
//!
//! In 2D the rotational factor of a polar decomposition `M = R·S`
//! collapses to a single angle, so it is extracted in closed form
//! instead of through an eigen-decomposition.

use glam::{Mat2, Vec2};

use crate::complex::Complex;

/// Outer product `a ⊗ b` (column-major: `col_j = a * b[j]`).
#[inline]
pub fn outer(a: Vec2, b: Vec2) -> Mat2 {
    Mat2::from_cols(a * b.x, a * b.y)
}

/// Rotational part of the polar decomposition of `m`.
///
/// The closest rotation to `[[a, b], [c, d]]` has angle
/// `atan2(c − b, a + d)`. When both terms vanish (a singular or purely
/// reflective matrix, e.g. a collinear configuration) the rotation is
/// undefined and the identity is returned.
pub fn polar_rotation(m: Mat2, eps: f32) -> Complex {
    let a = m.x_axis.x;
    let c = m.x_axis.y;
    let b = m.y_axis.x;
    let d = m.y_axis.y;
    Complex::normalized_or_identity(a + d, c - b, eps)
}

/// Inverse of `m`, or `None` if `|det(m)| <= eps`.
pub fn try_inverse(m: Mat2, eps: f32) -> Option<Mat2> {
    let det = m.determinant();
    if !(det.abs() > eps) || !det.is_finite() {
        return None;
    }
    Some(m.inverse())
}
