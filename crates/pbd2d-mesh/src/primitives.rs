//! Immutable topological records.
//!
//! All records reference points of a single body through [`PointId`]
//! handles and are created once when the body is initialized.

use pbd2d_math::geometry::signed_area2;
use pbd2d_math::Vec2;
use pbd2d_types::{IndexedVec, Pbd2dError, Pbd2dResult, PointId};
use serde::{Deserialize, Serialize};

/// A triangle referencing three points of its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: PointId,
    pub b: PointId,
    pub c: PointId,
}

impl Triangle {
    #[inline]
    pub fn new(a: PointId, b: PointId, c: PointId) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn points(&self) -> [PointId; 3] {
        [self.a, self.b, self.c]
    }

    /// Twice the signed area under `positions`.
    pub fn signed_area2(&self, positions: &IndexedVec<PointId, Vec2>) -> f32 {
        signed_area2(positions[self.a], positions[self.b], positions[self.c])
    }

    /// Returns `true` if the triangle has `a → b` as one of its directed edges.
    pub fn has_directed_edge(&self, a: PointId, b: PointId) -> bool {
        (self.a == a && self.b == b) || (self.b == a && self.c == b) || (self.c == a && self.a == b)
    }
}

impl From<[u32; 3]> for Triangle {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::new(PointId(a), PointId(b), PointId(c))
    }
}

/// A segment between two points of its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub a: PointId,
    pub b: PointId,
}

impl Edge {
    #[inline]
    pub fn new(a: PointId, b: PointId) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn points(&self) -> [PointId; 2] {
        [self.a, self.b]
    }

    /// The same edge with endpoints ordered by handle.
    pub fn canonical(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self::new(self.b, self.a)
        }
    }

    pub fn length(&self, positions: &IndexedVec<PointId, Vec2>) -> f32 {
        positions[self.a].distance(positions[self.b])
    }
}

impl From<[u32; 2]> for Edge {
    fn from([a, b]: [u32; 2]) -> Self {
        Self::new(PointId(a), PointId(b))
    }
}

/// Boundary edge of a triangle mesh, oriented as in its triangle.
pub type ExternalEdge = Edge;

/// Edge taking part in capsule collisions.
pub type CollidableEdge = Edge;

/// A static line `{ p : (p − origin)·normal = 0 }`.
///
/// With `half_extent` set, only points whose projection onto the line
/// lies within `half_extent` of `origin` are considered, which turns the
/// line into a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub origin: Vec2,
    /// Unit normal; the positive side is "outside".
    pub normal: Vec2,
    pub half_extent: Option<f32>,
}

impl Line {
    /// Creates an infinite line. `normal` is normalized.
    pub fn new(origin: Vec2, normal: Vec2) -> Pbd2dResult<Self> {
        let normal = normal.try_normalize().ok_or_else(|| {
            Pbd2dError::InvalidConfig(format!("Line normal {normal} cannot be normalized"))
        })?;
        Ok(Self {
            origin,
            normal,
            half_extent: None,
        })
    }

    /// Restricts the line to a segment of length `2 * half_extent`.
    pub fn with_half_extent(mut self, half_extent: f32) -> Pbd2dResult<Self> {
        if !(half_extent > 0.0) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "Line half extent must be positive, got {half_extent}"
            )));
        }
        self.half_extent = Some(half_extent);
        Ok(self)
    }

    /// Unit direction along the line (normal rotated by −90°).
    #[inline]
    pub fn tangent(&self) -> Vec2 {
        -self.normal.perp()
    }

    /// Signed distance of `p` from the line translated by `displacement`.
    #[inline]
    pub fn signed_distance(&self, p: Vec2, displacement: Vec2) -> f32 {
        (p - self.origin - displacement).dot(self.normal)
    }

    /// Whether `p` projects inside the line's extent.
    pub fn covers(&self, p: Vec2, displacement: Vec2) -> bool {
        match self.half_extent {
            None => true,
            Some(h) => (p - self.origin - displacement).dot(self.tangent()).abs() <= h,
        }
    }
}
