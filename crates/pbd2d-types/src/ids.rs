//! Strongly-typed identifiers for simulation entities.
//!
//! Newtype wrappers prevent accidental mixing of point indices
//! with triangle or edge indices. Every handle is dense and scoped
//! to the body that owns the buffer it indexes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dense integer handle usable as an index into an [`IndexedVec`](crate::IndexedVec).
pub trait Idx: Copy + Eq + Ord + fmt::Debug {
    /// Builds the handle from a raw array index.
    fn from_index(index: usize) -> Self;

    /// Returns the raw index as `usize` for array indexing.
    fn index(self) -> usize;
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// The first handle.
            pub const ZERO: Self = Self(0);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Idx for $name {
            #[inline]
            fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(val: u32) -> Self {
                Self(val)
            }
        }
    };
}

define_id!(
    /// Index into a body's point buffers.
    PointId
);
define_id!(
    /// Index into a body's triangle buffer.
    TriangleId
);
define_id!(
    /// Index into a body's unique edge buffer.
    EdgeId
);
define_id!(
    /// Index into a body's boundary (external) edge buffer.
    ExternalEdgeId
);
define_id!(
    /// Index into a body's collidable edge buffer.
    CollidableEdgeId
);
define_id!(
    /// Handle of a body registered with a world.
    ///
    /// Handles are never reused, so a removed body's id stays dead.
    BodyId
);
