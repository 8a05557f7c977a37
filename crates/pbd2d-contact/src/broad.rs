//! Broad phase collision detection trait.
//!
//! Quickly identifies *candidate* edge pairs between two capsule
//! bodies. The narrow phase then refines these candidates into actual
//! contacts. A bounding volume tree is expected to live outside this
//! crate and plug in through [`BroadPhase`].

use pbd2d_math::geometry::Aabb;
use pbd2d_types::CollidableEdgeId;
use serde::{Deserialize, Serialize};

use crate::views::CapsuleShape;

/// Candidate pair: collidable edge `a` of the first body, `b` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgePair {
    pub a: CollidableEdgeId,
    pub b: CollidableEdgeId,
}

impl EdgePair {
    pub fn new(a: CollidableEdgeId, b: CollidableEdgeId) -> Self {
        Self { a, b }
    }
}

impl From<(u32, u32)> for EdgePair {
    fn from((a, b): (u32, u32)) -> Self {
        Self::new(CollidableEdgeId(a), CollidableEdgeId(b))
    }
}

/// Trait for broad phase collision detection.
///
/// Called once per sub-step for every capsule–capsule record, before
/// the narrow phase runs.
///
/// # Implementations
/// - `NullBroadPhase` — leaves candidate lists untouched
/// - `ExhaustiveBroadPhase` — all pairs whose inflated bounds overlap
pub trait BroadPhase: Send {
    /// Fill `pairs` with the candidates between `first` and `second`.
    fn find_pairs(
        &mut self,
        first: &CapsuleShape<'_>,
        second: &CapsuleShape<'_>,
        pairs: &mut Vec<EdgePair>,
    );

    /// Returns the broad phase strategy name.
    fn name(&self) -> &str;
}

/// No-op broad phase; candidate lists keep whatever the caller put there.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBroadPhase;

impl BroadPhase for NullBroadPhase {
    fn find_pairs(
        &mut self,
        _first: &CapsuleShape<'_>,
        _second: &CapsuleShape<'_>,
        _pairs: &mut Vec<EdgePair>,
    ) {
    }

    fn name(&self) -> &str {
        "null_broad_phase"
    }
}

/// Tests every edge pair against capsule bounds inflated by `margin`.
///
/// Quadratic in the edge counts. Pairs come out in `(a, b)` index
/// order.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveBroadPhase {
    pub margin: f32,
    bounds_b: Vec<Aabb>,
}

impl ExhaustiveBroadPhase {
    pub fn new(margin: f32) -> Self {
        Self {
            margin: margin.max(0.0),
            bounds_b: Vec::new(),
        }
    }
}

impl BroadPhase for ExhaustiveBroadPhase {
    fn find_pairs(
        &mut self,
        first: &CapsuleShape<'_>,
        second: &CapsuleShape<'_>,
        pairs: &mut Vec<EdgePair>,
    ) {
        pairs.clear();

        self.bounds_b.clear();
        self.bounds_b.extend(second.edges.ids().map(|id| {
            let (p0, p1) = second.segment(id);
            Aabb::from_segment(p0, p1, second.radius + self.margin)
        }));

        for a in first.edges.ids() {
            let (p0, p1) = first.segment(a);
            let bounds_a = Aabb::from_segment(p0, p1, first.radius);
            for (b, bounds_b) in second.edges.ids().zip(self.bounds_b.iter()) {
                if bounds_a.overlaps(bounds_b) {
                    pairs.push(EdgePair::new(a, b));
                }
            }
        }
    }

    fn name(&self) -> &str {
        "exhaustive_broad_phase"
    }
}
