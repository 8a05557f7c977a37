//! Procedural geometry generators for tests and demo scenarios.
//!
//! These generators produce deterministic, resolution-configurable
//! geometry with counter-clockwise winding.

use pbd2d_math::Vec2;

use crate::mesh::{RodData, TriMeshData};

/// Generates a rectangular quad grid centered at `center`.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width`, `height` — Total extent.
///
/// # Example
/// ```
/// use pbd2d_math::Vec2;
/// use pbd2d_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0, Vec2::ZERO);
/// assert_eq!(mesh.point_count(), 9);    // 3×3 points
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32, center: Vec2) -> TriMeshData {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let origin = center - Vec2::new(width, height) * 0.5;
    let mut positions = Vec::with_capacity(verts_x * verts_y);
    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            positions.push(origin + Vec2::new(u * width, v * height));
        }
    }

    let mut triangles = Vec::with_capacity(cols * rows * 2);
    for j in 0..rows {
        for i in 0..cols {
            let bot_left = (j * verts_x + i) as u32;
            let bot_right = bot_left + 1;
            let top_left = bot_left + verts_x as u32;
            let top_right = top_left + 1;

            triangles.push([bot_left, bot_right, top_right]);
            triangles.push([bot_left, top_right, top_left]);
        }
    }

    TriMeshData {
        positions,
        triangles,
    }
}

/// Generates a straight rod from `start` to `end` with `segments` edges.
pub fn straight_rod(start: Vec2, end: Vec2, segments: usize) -> RodData {
    let segments = segments.max(1);
    let positions = (0..=segments)
        .map(|i| start.lerp(end, i as f32 / segments as f32))
        .collect();
    RodData::polyline(positions)
}
