//! Unit complex numbers used as 2D rotors.

use glam::{Mat2, Vec2};
use serde::{Deserialize, Serialize};

/// A complex number `re + i·im`, used as a 2D rotation when normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f32,
    pub im: f32,
}

impl Complex {
    /// The identity rotation.
    pub const IDENTITY: Self = Self { re: 1.0, im: 0.0 };

    #[inline]
    pub fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Rotor for a counter-clockwise rotation by `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { re: cos, im: sin }
    }

    /// Normalizes `(re, im)` into a unit rotor.
    ///
    /// Returns the identity when the magnitude is below `eps`.
    pub fn normalized_or_identity(re: f32, im: f32, eps: f32) -> Self {
        let len = (re * re + im * im).sqrt();
        if !(len > eps) {
            return Self::IDENTITY;
        }
        Self {
            re: re / len,
            im: im / len,
        }
    }

    /// Rotation angle in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.im.atan2(self.re)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Rotates `v` by this rotor (complex multiplication).
    #[inline]
    pub fn rotate(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.re * v.x - self.im * v.y,
            self.im * v.x + self.re * v.y,
        )
    }

    /// The equivalent 2×2 rotation matrix.
    pub fn to_mat2(self) -> Mat2 {
        Mat2::from_cols(Vec2::new(self.re, self.im), Vec2::new(-self.im, self.re))
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}
