//! # pbd2d-world
//!
//! Bodies, the pairwise interaction registry and the step driver.
//!
//! ## Key Types
//!
//! - [`Body`] — a registered body (`TriMesh`, `Rod` or `GroundLine`)
//! - [`Role`] — a collision capability a body exposes
//! - [`INTERACTION_KINDS`] — the table of body pairings that interact
//! - [`InteractionRegistry`] — one record per qualifying body pair
//! - [`World`] — owns everything and advances it with [`World::step`]
//!
//! ## Lifecycle
//!
//! ```text
//! let mut world = World::new(config)?;
//! let a = world.insert_body(..);   // phase 1: register bodies
//! let b = world.insert_body(..);
//! world.materialize();             // phase 2: build all records
//! let c = world.add_body(..);      // later bodies: records for `c` only
//! world.remove_body(a)?;           // records touching `a` go first
//! world.step()?;
//! ```

pub mod body;
pub mod registry;
pub mod roles;
pub mod settings;
pub mod store;
pub mod world;

pub use body::{Body, GroundLine, Rod, TriMesh};
pub use registry::{Collisions, InteractionRecord, InteractionRegistry};
pub use roles::{CollisionModel, InteractionKind, InteractionKindDef, Pairing, Role, INTERACTION_KINDS};
pub use settings::{RodSettings, TriMeshSettings};
pub use store::BodyStore;
pub use world::{StepReport, World};
