//! # pbd2d-mesh
//!
//! Topological primitives and authored geometry for 2D bodies.
//!
//! ## Key Types
//!
//! - [`TriMeshData`] — authored triangle mesh (points + triangles).
//! - [`RodData`] — authored polyline (points + edges).
//! - [`Topology`] — unique and boundary edges derived from triangles.
//! - [`primitives`] — `Triangle`, `Edge`, `Line` records referenced by
//!   typed handles.
//! - Procedural generators for tests and demo scenarios.

pub mod generators;
pub mod mesh;
pub mod primitives;
pub mod topology;

pub use mesh::{RodData, TriMeshData};
pub use primitives::{CollidableEdge, Edge, ExternalEdge, Line, Triangle};
pub use topology::Topology;
