//! Authored geometry handed to body constructors.
//!
//! Loading and authoring live outside the engine; these types are the
//! hand-off format. Both validate index bounds and degeneracy so that
//! bodies can assume well-formed topology.

use pbd2d_math::geometry::signed_area2;
use pbd2d_math::Vec2;
use pbd2d_types::constants::DEGENERATE_AREA_THRESHOLD;
use pbd2d_types::{Pbd2dError, Pbd2dResult};
use serde::{Deserialize, Serialize};

/// An authored triangle mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriMeshData {
    /// Initial point positions.
    pub positions: Vec<Vec2>,
    /// Triangle indices into `positions`.
    pub triangles: Vec<[u32; 3]>,
}

impl TriMeshData {
    #[inline]
    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - At least one triangle
    /// - Triangle indices are within bounds
    /// - No repeated vertex indices within a triangle
    /// - No zero-area triangles
    pub fn validate(&self) -> Pbd2dResult<()> {
        let n = self.positions.len();
        if self.triangles.is_empty() {
            return Err(Pbd2dError::InvalidMesh("Mesh has no triangles".into()));
        }

        for (t, &[a, b, c]) in self.triangles.iter().enumerate() {
            for idx in [a, b, c] {
                if idx as usize >= n {
                    return Err(Pbd2dError::InvalidMesh(format!(
                        "Triangle {t} index {idx} is out of range (point count: {n})"
                    )));
                }
            }
            if a == b || b == c || a == c {
                return Err(Pbd2dError::InvalidMesh(format!(
                    "Triangle {t} has repeated vertex indices: [{a}, {b}, {c}]"
                )));
            }
            let area2 = signed_area2(
                self.positions[a as usize],
                self.positions[b as usize],
                self.positions[c as usize],
            );
            if area2.abs() <= DEGENERATE_AREA_THRESHOLD {
                return Err(Pbd2dError::InvalidMesh(format!(
                    "Triangle {t} is degenerate (twice signed area = {area2:e})"
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from flat `[x0, y0, x1, y1, ...]` positions
    /// and `[a0, b0, c0, a1, ...]` indices.
    pub fn from_flat(positions: &[f32], indices: &[u32]) -> Pbd2dResult<Self> {
        if positions.len() % 2 != 0 {
            return Err(Pbd2dError::InvalidMesh(
                "Flat positions length not divisible by 2".into(),
            ));
        }
        if indices.len() % 3 != 0 {
            return Err(Pbd2dError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        let mesh = Self {
            positions: positions
                .chunks_exact(2)
                .map(|p| Vec2::new(p[0], p[1]))
                .collect(),
            triangles: indices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect(),
        };
        mesh.validate()?;
        Ok(mesh)
    }
}

/// An authored rod: a set of points joined by edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RodData {
    pub positions: Vec<Vec2>,
    pub edges: Vec<[u32; 2]>,
}

impl RodData {
    /// A single open polyline through `positions`.
    pub fn polyline(positions: Vec<Vec2>) -> Self {
        let edges = (1..positions.len() as u32).map(|i| [i - 1, i]).collect();
        Self { positions, edges }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    /// Validates that every edge references two distinct, in-range,
    /// non-coincident points.
    pub fn validate(&self) -> Pbd2dResult<()> {
        let n = self.positions.len();
        if self.edges.is_empty() {
            return Err(Pbd2dError::InvalidMesh("Rod has no edges".into()));
        }
        for (e, &[a, b]) in self.edges.iter().enumerate() {
            if a as usize >= n || b as usize >= n {
                return Err(Pbd2dError::InvalidMesh(format!(
                    "Edge {e} [{a}, {b}] is out of range (point count: {n})"
                )));
            }
            if a == b {
                return Err(Pbd2dError::InvalidMesh(format!(
                    "Edge {e} connects point {a} to itself"
                )));
            }
            if self.positions[a as usize] == self.positions[b as usize] {
                return Err(Pbd2dError::InvalidMesh(format!(
                    "Edge {e} has zero length"
                )));
            }
        }
        Ok(())
    }
}
