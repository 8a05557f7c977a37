//! Pairwise interaction registry.
//!
//! Holds one [`InteractionRecord`] per pair of live bodies that
//! qualifies for an entry of [`INTERACTION_KINDS`]. Records never own
//! bodies; they name them by id and carry the per-pair collision
//! buffers.
//!
//! Records are built in two phases: bodies are registered first, then
//! [`InteractionRegistry::materialize`] creates every record at once.
//! Bodies added later go through [`InteractionRegistry::materialize_for`],
//! and [`InteractionRegistry::invalidate`] drops a body's records before
//! the body itself is removed.

use std::collections::BTreeSet;

use pbd2d_contact::{CapsuleCapsuleCollisions, PointLineCollisions};
use pbd2d_types::BodyId;

use crate::roles::{CollisionModel, InteractionKind, InteractionKindDef, Pairing, INTERACTION_KINDS};
use crate::store::BodyStore;

/// Collision buffers of a record.
#[derive(Debug, Clone)]
pub enum Collisions {
    CapsuleCapsule(CapsuleCapsuleCollisions),
    PointLine(PointLineCollisions),
}

impl Collisions {
    fn new(model: CollisionModel, friction: f32) -> Self {
        match model {
            CollisionModel::CapsuleCapsule => {
                Collisions::CapsuleCapsule(CapsuleCapsuleCollisions::new(friction))
            }
            CollisionModel::PointLine => Collisions::PointLine(PointLineCollisions::new(friction)),
        }
    }

    /// Contacts found by the last pass.
    pub fn contact_count(&self) -> usize {
        match self {
            Collisions::CapsuleCapsule(c) => c.collisions.len(),
            Collisions::PointLine(c) => c.contacts.len(),
        }
    }

    pub fn friction(&self) -> f32 {
        match self {
            Collisions::CapsuleCapsule(c) => c.friction,
            Collisions::PointLine(c) => c.friction,
        }
    }
}

/// One interacting body pair.
///
/// The pair is fixed by the registry; only the collision buffers are
/// open to callers.
#[derive(Debug, Clone)]
pub struct InteractionRecord {
    kind: InteractionKind,
    first: BodyId,
    second: BodyId,
    pub collisions: Collisions,
}

impl InteractionRecord {
    #[inline]
    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Body in the kind's first role.
    #[inline]
    pub fn first(&self) -> BodyId {
        self.first
    }

    /// Body in the kind's second role.
    #[inline]
    pub fn second(&self) -> BodyId {
        self.second
    }

    #[inline]
    pub fn involves(&self, body: BodyId) -> bool {
        self.first == body || self.second == body
    }

    #[inline]
    pub fn def(&self) -> &'static InteractionKindDef {
        self.kind.def()
    }
}

type RecordKey = (InteractionKind, BodyId, BodyId);

/// All interaction records, in creation order.
#[derive(Debug, Clone, Default)]
pub struct InteractionRegistry {
    records: Vec<InteractionRecord>,
    keys: BTreeSet<RecordKey>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates every missing record for the live bodies in `bodies`.
    ///
    /// Returns the number of records created.
    pub fn materialize(&mut self, bodies: &BodyStore) -> usize {
        let mut created = 0;
        for def in &INTERACTION_KINDS {
            let firsts = bodies.with_role(def.first);
            let seconds = bodies.with_role(def.second);
            for &a in &firsts {
                for &b in &seconds {
                    if self.try_insert(def, a, b, bodies) {
                        created += 1;
                    }
                }
            }
        }
        tracing::debug!(created, total = self.records.len(), "materialized interaction records");
        created
    }

    /// Creates the missing records that involve `body`.
    pub fn materialize_for(&mut self, bodies: &BodyStore, body: BodyId) -> usize {
        let Some(target) = bodies.get(body) else {
            return 0;
        };
        let mut created = 0;
        for def in &INTERACTION_KINDS {
            if target.has_role(def.first) {
                for other in bodies.with_role(def.second) {
                    if self.try_insert(def, body, other, bodies) {
                        created += 1;
                    }
                }
            }
            if target.has_role(def.second) {
                for other in bodies.with_role(def.first) {
                    if self.try_insert(def, other, body, bodies) {
                        created += 1;
                    }
                }
            }
        }
        tracing::debug!(?body, created, "materialized records for body");
        created
    }

    /// Drops every record that references `body`.
    ///
    /// Returns the number of records removed.
    pub fn invalidate(&mut self, body: BodyId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.involves(body));
        self.keys.retain(|&(_, a, b)| a != body && b != body);
        let removed = before - self.records.len();
        tracing::debug!(?body, removed, "invalidated interaction records");
        removed
    }

    fn try_insert(&mut self, def: &InteractionKindDef, first: BodyId, second: BodyId, bodies: &BodyStore) -> bool {
        if first == second && !def.reflexive {
            return false;
        }
        let (first, second) = match def.pairing {
            Pairing::Ordered => (first, second),
            Pairing::Unordered => (first.min(second), first.max(second)),
        };
        if !self.keys.insert((def.kind, first, second)) {
            return false;
        }

        let friction = match (bodies.get(first), bodies.get(second)) {
            (Some(a), Some(b)) => 0.5 * (a.friction() + b.friction()),
            _ => 0.0,
        };
        self.records.push(InteractionRecord {
            kind: def.kind,
            first,
            second,
            collisions: Collisions::new(def.model, friction),
        });
        true
    }

    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    /// Mutable records. Their body pair stays read-only.
    pub fn records_mut(&mut self) -> &mut [InteractionRecord] {
        &mut self.records
    }

    /// First body referenced by a record that `bodies` no longer holds.
    pub fn missing_body(&self, bodies: &BodyStore) -> Option<BodyId> {
        self.records
            .iter()
            .flat_map(|r| [r.first, r.second])
            .find(|&id| !bodies.contains(id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of `kind`.
    pub fn count_of(&self, kind: InteractionKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Record of `kind` between `first` and `second`, if any.
    ///
    /// Argument order is ignored for unordered kinds.
    pub fn find(&self, kind: InteractionKind, first: BodyId, second: BodyId) -> Option<&InteractionRecord> {
        let (first, second) = match kind.def().pairing {
            Pairing::Ordered => (first, second),
            Pairing::Unordered => (first.min(second), first.max(second)),
        };
        self.records
            .iter()
            .find(|r| r.kind == kind && r.first == first && r.second == second)
    }
}
