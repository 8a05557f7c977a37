//! Roles and the interaction kind table.
//!
//! A role is one collision capability of a body. An interaction kind
//! pairs two roles; every pair of live bodies exposing them gets one
//! record in the registry.

use serde::{Deserialize, Serialize};

/// A collision capability a body exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Boundary edges of a triangle mesh, colliding with other meshes.
    TriMeshCapsules,
    /// Boundary edges of a triangle mesh, as seen by rods.
    TriMeshCapsulesForRods,
    /// Points of a triangle mesh.
    TriMeshPoints,
    /// Edges of a rod.
    RodCapsules,
    /// A static ground line.
    GroundLine,
}

/// Whether `(A, B)` and `(B, A)` are the same pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pairing {
    Ordered,
    Unordered,
}

/// Narrow-phase model used by a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionModel {
    CapsuleCapsule,
    PointLine,
}

/// Every interaction kind; the discriminant indexes [`INTERACTION_KINDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    TriMeshTriMesh = 0,
    RodTriMesh = 1,
    TriMeshGround = 2,
}

impl InteractionKind {
    /// Table entry of this kind.
    #[inline]
    pub fn def(self) -> &'static InteractionKindDef {
        &INTERACTION_KINDS[self as usize]
    }
}

/// One row of the interaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionKindDef {
    pub kind: InteractionKind,
    pub name: &'static str,
    /// Role required of the record's first body.
    pub first: Role,
    /// Role required of the record's second body.
    pub second: Role,
    pub pairing: Pairing,
    /// Whether a body may pair with itself.
    pub reflexive: bool,
    pub model: CollisionModel,
}

/// The interaction kinds, in materialization order.
pub static INTERACTION_KINDS: [InteractionKindDef; 3] = [
    InteractionKindDef {
        kind: InteractionKind::TriMeshTriMesh,
        name: "trimesh_trimesh_capsules",
        first: Role::TriMeshCapsules,
        second: Role::TriMeshCapsules,
        pairing: Pairing::Unordered,
        reflexive: false,
        model: CollisionModel::CapsuleCapsule,
    },
    InteractionKindDef {
        kind: InteractionKind::RodTriMesh,
        name: "rod_trimesh_capsules",
        first: Role::RodCapsules,
        second: Role::TriMeshCapsulesForRods,
        pairing: Pairing::Ordered,
        reflexive: false,
        model: CollisionModel::CapsuleCapsule,
    },
    InteractionKindDef {
        kind: InteractionKind::TriMeshGround,
        name: "trimesh_points_ground_line",
        first: Role::TriMeshPoints,
        second: Role::GroundLine,
        pairing: Pairing::Ordered,
        reflexive: false,
        model: CollisionModel::PointLine,
    },
];
