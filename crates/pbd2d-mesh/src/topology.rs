//! Mesh topology queries.
//!
//! Derives edge sets from the triangle buffer. Maps are ordered so the
//! resulting buffers (and every handle into them) are deterministic.

use std::collections::BTreeMap;

use pbd2d_types::{EdgeId, ExternalEdgeId, IndexedVec, PointId, TriangleId};

use crate::primitives::{Edge, ExternalEdge, Triangle};

/// Precomputed topology information for a triangle mesh.
///
/// Built once when a body is initialized.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges with endpoints ordered by handle, sorted.
    pub edges: IndexedVec<EdgeId, Edge>,

    /// For each edge, the one or two adjacent triangles.
    /// Boundary edges have exactly 1 adjacent triangle.
    pub edge_triangles: IndexedVec<EdgeId, Vec<TriangleId>>,

    /// Boundary edges, oriented as they appear in their triangle.
    pub external_edges: IndexedVec<ExternalEdgeId, ExternalEdge>,
}

impl Topology {
    /// Build topology from a triangle buffer.
    pub fn build(triangles: &IndexedVec<TriangleId, Triangle>) -> Self {
        // Key: canonical edge; value: adjacent triangles in index order.
        let mut edge_map: BTreeMap<Edge, Vec<TriangleId>> = BTreeMap::new();
        for (t, tri) in triangles.iter_enumerated() {
            for (v0, v1) in [(tri.a, tri.b), (tri.b, tri.c), (tri.c, tri.a)] {
                edge_map
                    .entry(Edge::new(v0, v1).canonical())
                    .or_default()
                    .push(t);
            }
        }

        let mut edges = IndexedVec::new();
        let mut edge_triangles = IndexedVec::new();
        let mut external_edges = IndexedVec::new();

        for (edge, tris) in edge_map {
            if let [t] = tris.as_slice() {
                let tri = triangles[*t];
                let oriented = if tri.has_directed_edge(edge.a, edge.b) {
                    edge
                } else {
                    Edge::new(edge.b, edge.a)
                };
                external_edges.push(oriented);
            }
            edges.push(edge);
            edge_triangles.push(tris);
        }

        Self {
            edges,
            edge_triangles,
            external_edges,
        }
    }

    /// Returns the number of boundary edges.
    pub fn boundary_edge_count(&self) -> usize {
        self.external_edges.len()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(&self) -> bool {
        self.external_edges.is_empty()
    }

    /// Points lying on the boundary, ascending and deduplicated.
    pub fn boundary_points(&self) -> Vec<PointId> {
        let mut points: Vec<PointId> = self
            .external_edges
            .iter()
            .flat_map(|e| e.points())
            .collect();
        points.sort_unstable();
        points.dedup();
        points
    }
}
