//! # pbd2d-contact
//!
//! Collision detection and contact response between bodies.
//!
//! The collision pipeline is split into three phases:
//! 1. **Broad phase** — fills candidate [`EdgePair`] lists (the
//!    acceleration structure itself lives outside this crate)
//! 2. **Narrow phase** — exact closest-point tests on predicted positions
//! 3. **Contact response** — position projection with Coulomb friction
//!
//! Solvers operate on borrowed body views ([`CapsuleBody`], [`PointBody`],
//! [`LineBody`]) that only live for the duration of one call.

pub mod broad;
pub mod capsule_capsule;
pub mod contact;
pub mod friction;
pub mod point_line;
pub mod response;
pub mod views;

pub use broad::{BroadPhase, EdgePair, ExhaustiveBroadPhase, NullBroadPhase};
pub use capsule_capsule::CapsuleCapsuleCollisions;
pub use contact::{EdgeEdgeContactInfo, PointLineContact};
pub use point_line::PointLineCollisions;
pub use response::ContactResult;
pub use views::{CapsuleBody, CapsuleShape, LineBody, PointBody};
