//! Borrowed body views consumed by the collision solvers.
//!
//! A view is built by the owner of the body for one solver call and
//! dropped afterwards; solvers never keep one.

use pbd2d_math::Vec2;
use pbd2d_mesh::{CollidableEdge, Line};
use pbd2d_solver::PointState;
use pbd2d_types::{CollidableEdgeId, IndexedVec, PointId};

/// A body whose collidable edges collide as capsules of `radius`.
#[derive(Debug)]
pub struct CapsuleBody<'a> {
    pub state: &'a mut PointState,
    pub edges: &'a IndexedVec<CollidableEdgeId, CollidableEdge>,
    pub radius: f32,
    pub friction: f32,
}

impl<'a> CapsuleBody<'a> {
    /// Read-only geometry for broad-phase queries.
    pub fn shape(&self) -> CapsuleShape<'_> {
        CapsuleShape {
            positions: &self.state.predicted_positions,
            edges: self.edges,
            radius: self.radius,
        }
    }
}

/// Read-only capsule geometry over predicted positions.
#[derive(Debug, Clone, Copy)]
pub struct CapsuleShape<'a> {
    pub positions: &'a IndexedVec<PointId, Vec2>,
    pub edges: &'a IndexedVec<CollidableEdgeId, CollidableEdge>,
    pub radius: f32,
}

impl<'a> CapsuleShape<'a> {
    /// Endpoints of collidable edge `id`.
    #[inline]
    pub fn segment(&self, id: CollidableEdgeId) -> (Vec2, Vec2) {
        let edge = self.edges[id];
        (self.positions[edge.a], self.positions[edge.b])
    }
}

/// A body whose points collide as discs of `radius`.
#[derive(Debug)]
pub struct PointBody<'a> {
    pub state: &'a mut PointState,
    pub radius: f32,
    pub friction: f32,
}

/// A static line translated by `displacement`.
#[derive(Debug, Clone, Copy)]
pub struct LineBody<'a> {
    pub line: &'a Line,
    pub displacement: Vec2,
    pub friction: f32,
}
