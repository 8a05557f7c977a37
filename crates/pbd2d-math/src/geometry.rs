//! Geometry kernels shared by constraints and narrow phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D cross product `a.x·b.y − a.y·b.x`.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Twice the signed area of triangle `(p0, p1, p2)`.
///
/// Positive for counter-clockwise winding.
#[inline]
pub fn signed_area2(p0: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    cross(p1 - p0, p2 - p0)
}

/// Gradients of [`signed_area2`] with respect to `p0`, `p1`, `p2`.
///
/// Each gradient is the opposite edge rotated by −90°; they sum to zero.
#[inline]
pub fn signed_area2_gradients(p0: Vec2, p1: Vec2, p2: Vec2) -> [Vec2; 3] {
    let g1 = -(p2 - p0).perp();
    let g2 = (p1 - p0).perp();
    [-(g1 + g2), g1, g2]
}

/// Closest points between segments `[a0, a1]` and `[b0, b1]`.
///
/// `s` parametrizes segment A (`a0 + s·(a1 − a0)`), `t` segment B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentClosestPoints {
    pub s: f32,
    pub t: f32,
    pub point_a: Vec2,
    pub point_b: Vec2,
}

impl SegmentClosestPoints {
    /// Distance between the two closest points.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.point_a.distance(self.point_b)
    }
}

/// Computes the closest points between two segments.
///
/// Parallel and degenerate inputs have infinitely many solutions; the
/// result is then deterministic but not canonical: `s` is pinned to 0
/// and `t` is the clamped projection of `a0` onto B, with `s` clamped
/// back from it when needed. Any returned pair attains the minimum
/// distance.
pub fn closest_points_segment_segment(
    a0: Vec2,
    a1: Vec2,
    b0: Vec2,
    b1: Vec2,
    eps: f32,
) -> SegmentClosestPoints {
    let d1 = a1 - a0;
    let d2 = b1 - b0;
    let r = a0 - b0;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    let (s, t) = if a <= eps && e <= eps {
        (0.0, 0.0)
    } else if a <= eps {
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(r);
        if e <= eps {
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;
            let mut s = if denom > eps * a * e {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let mut t = (b * s + f) / e;
            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
            (s, t)
        }
    };

    SegmentClosestPoints {
        s,
        t,
        point_a: a0 + d1 * s,
        point_b: b0 + d2 * t,
    }
}

/// Axis-aligned bounds of a segment inflated by `margin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_segment(p0: Vec2, p1: Vec2, margin: f32) -> Self {
        let m = Vec2::splat(margin);
        Self {
            min: p0.min(p1) - m,
            max: p0.max(p1) + m,
        }
    }

    /// True if the two boxes overlap (touching counts).
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
