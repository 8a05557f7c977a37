//! Body storage keyed by [`BodyId`].
//!
//! Slots are never reused: removing a body leaves a hole, so a stale
//! id can never reach a different body.

use pbd2d_types::{BodyId, Idx};

use crate::body::Body;
use crate::roles::Role;

#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    slots: Vec<Option<Body>>,
    live: usize,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = BodyId::from_index(self.slots.len());
        self.slots.push(Some(body));
        self.live += 1;
        id
    }

    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let body = self.slots.get_mut(id.index())?.take()?;
        self.live -= 1;
        Some(body)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.slots.get(id.index())?.as_ref()
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    #[inline]
    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live bodies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|b| (BodyId::from_index(i), b)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut Body)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|b| (BodyId::from_index(i), b)))
    }

    /// Ids of live bodies with `role`, in registration order.
    pub fn with_role(&self, role: Role) -> Vec<BodyId> {
        self.iter()
            .filter(|(_, b)| b.has_role(role))
            .map(|(id, _)| id)
            .collect()
    }

    /// Mutable access to two distinct live bodies at once.
    pub fn pair_mut(&mut self, first: BodyId, second: BodyId) -> Option<(&mut Body, &mut Body)> {
        let (i, j) = (first.index(), second.index());
        if i == j || i.max(j) >= self.slots.len() {
            return None;
        }
        if i < j {
            let (lo, hi) = self.slots.split_at_mut(j);
            Some((lo[i].as_mut()?, hi[0].as_mut()?))
        } else {
            let (lo, hi) = self.slots.split_at_mut(i);
            Some((hi[0].as_mut()?, lo[j].as_mut()?))
        }
    }
}
