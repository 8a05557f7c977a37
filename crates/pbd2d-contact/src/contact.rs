//! Contact record types.
//!
//! Records are rebuilt from scratch every sub-step and never outlive it.

use pbd2d_math::Vec2;
use pbd2d_types::{CollidableEdgeId, PointId};
use serde::{Deserialize, Serialize};

/// A contact between a collidable edge of body A and one of body B.
///
/// The contact point on A is `(1 − bar_a)·a₀ + bar_a·a₁`; the contact
/// point on B is `bar_b.x·b₀ + bar_b.y·b₁`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeEdgeContactInfo {
    /// Segment parameter of the contact point on edge A.
    pub bar_a: f32,
    /// Barycentric weights of the contact point on edge B.
    pub bar_b: Vec2,
    pub edge_a: CollidableEdgeId,
    pub edge_b: CollidableEdgeId,
}

impl EdgeEdgeContactInfo {
    pub fn new(bar_a: f32, bar_b: Vec2, edge_a: CollidableEdgeId, edge_b: CollidableEdgeId) -> Self {
        Self {
            bar_a,
            bar_b,
            edge_a,
            edge_b,
        }
    }

    /// Barycentric weights of the contact point on edge A.
    #[inline]
    pub fn weights_a(&self) -> [f32; 2] {
        [1.0 - self.bar_a, self.bar_a]
    }

    #[inline]
    pub fn weights_b(&self) -> [f32; 2] {
        [self.bar_b.x, self.bar_b.y]
    }
}

/// A point found inside a line's collision band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLineContact {
    pub point: PointId,
    /// Signed distance from the line before correction.
    pub distance: f32,
}

impl PointLineContact {
    /// Depth below `radius` (positive while in contact).
    pub fn penetration_depth(&self, radius: f32) -> f32 {
        (radius - self.distance).max(0.0)
    }
}
