//! Integration tests for pbd2d-mesh.

use pbd2d_math::Vec2;
use pbd2d_mesh::generators::{quad_grid, straight_rod};
use pbd2d_mesh::{Edge, Line, RodData, Topology, TriMeshData, Triangle};
use pbd2d_types::{IndexedVec, PointId, TriangleId};

fn make_single_triangle() -> TriMeshData {
    TriMeshData {
        positions: vec![Vec2::ZERO, Vec2::X, Vec2::Y],
        triangles: vec![[0, 1, 2]],
    }
}

fn triangles_of(mesh: &TriMeshData) -> IndexedVec<TriangleId, Triangle> {
    mesh.triangles.iter().copied().map(Triangle::from).collect()
}

// ─── TriMeshData Tests ────────────────────────────────────────

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.point_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_out_of_range_index() {
    let mut mesh = make_single_triangle();
    mesh.triangles[0] = [0, 1, 5];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_repeated_index() {
    let mut mesh = make_single_triangle();
    mesh.triangles[0] = [0, 1, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_zero_area() {
    let mesh = TriMeshData {
        positions: vec![Vec2::ZERO, Vec2::X, Vec2::new(2.0, 0.0)],
        triangles: vec![[0, 1, 2]],
    };
    let err = mesh.validate().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("degenerate"));
    assert!(message.contains("twice signed area"));
}

#[test]
fn from_flat_roundtrip() {
    let mesh = TriMeshData::from_flat(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], &[0, 1, 2]).unwrap();
    assert_eq!(mesh.positions[1], Vec2::X);
    assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
}

#[test]
fn from_flat_rejects_odd_positions() {
    assert!(TriMeshData::from_flat(&[0.0, 0.0, 1.0], &[0, 1, 2]).is_err());
}

#[test]
fn triangle_signed_area_from_buffer() {
    let mesh = make_single_triangle();
    let positions: IndexedVec<PointId, Vec2> = mesh.positions.clone().into();
    let tri = Triangle::from([0, 1, 2]);
    assert!((tri.signed_area2(&positions) - 1.0).abs() < 1e-6);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_counts_and_winding() {
    let mesh = quad_grid(3, 2, 3.0, 2.0, Vec2::new(1.0, 1.0));
    assert_eq!(mesh.point_count(), 12);
    assert_eq!(mesh.triangle_count(), 12);
    mesh.validate().unwrap();

    let positions: IndexedVec<PointId, Vec2> = mesh.positions.clone().into();
    for tri in triangles_of(&mesh).iter() {
        assert!(tri.signed_area2(&positions) > 0.0, "grid must be counter-clockwise");
    }
    assert_eq!(mesh.positions[0], Vec2::new(-0.5, 0.0));
}

#[test]
fn straight_rod_is_polyline() {
    let rod = straight_rod(Vec2::ZERO, Vec2::new(4.0, 0.0), 4);
    assert_eq!(rod.point_count(), 5);
    assert_eq!(rod.edges, vec![[0, 1], [1, 2], [2, 3], [3, 4]]);
    rod.validate().unwrap();
}

#[test]
fn rod_validate_rejects_zero_length_edge() {
    let rod = RodData::polyline(vec![Vec2::ZERO, Vec2::ZERO]);
    assert!(rod.validate().is_err());
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn single_triangle_topology() {
    let topo = Topology::build(&triangles_of(&make_single_triangle()));
    assert_eq!(topo.edges.len(), 3);
    assert_eq!(topo.boundary_edge_count(), 3);
    assert!(!topo.is_closed());
}

#[test]
fn external_edges_keep_triangle_orientation() {
    let mesh = make_single_triangle();
    let tris = triangles_of(&mesh);
    let topo = Topology::build(&tris);
    for edge in topo.external_edges.iter() {
        assert!(tris[TriangleId(0)].has_directed_edge(edge.a, edge.b));
    }
}

#[test]
fn quad_grid_topology() {
    // 2×2 grid: 16 unique edges, 8 on the boundary.
    let mesh = quad_grid(2, 2, 1.0, 1.0, Vec2::ZERO);
    let topo = Topology::build(&triangles_of(&mesh));
    assert_eq!(topo.edges.len(), 16);
    assert_eq!(topo.boundary_edge_count(), 8);
    assert_eq!(topo.boundary_points().len(), 8);
    // Centre point is interior.
    assert!(!topo.boundary_points().contains(&PointId(4)));
    for tris in topo.edge_triangles.iter() {
        assert!(tris.len() == 1 || tris.len() == 2);
    }
}

#[test]
fn edges_are_canonical_and_sorted() {
    let topo = Topology::build(&triangles_of(&quad_grid(2, 1, 1.0, 1.0, Vec2::ZERO)));
    let edges: Vec<Edge> = topo.edges.iter().copied().collect();
    assert!(edges.iter().all(|e| e.a < e.b));
    assert!(edges.windows(2).all(|w| w[0] < w[1]));
}

// ─── Line Tests ───────────────────────────────────────────────

#[test]
fn line_signed_distance_with_displacement() {
    let line = Line::new(Vec2::ZERO, Vec2::new(0.0, 2.0)).unwrap();
    assert_eq!(line.normal, Vec2::Y);
    assert!((line.signed_distance(Vec2::new(3.0, 1.5), Vec2::ZERO) - 1.5).abs() < 1e-6);
    assert!((line.signed_distance(Vec2::new(3.0, 1.5), Vec2::new(0.0, 1.0)) - 0.5).abs() < 1e-6);
}

#[test]
fn line_rejects_zero_normal() {
    assert!(Line::new(Vec2::ZERO, Vec2::ZERO).is_err());
}

#[test]
fn segment_line_extent() {
    let line = Line::new(Vec2::ZERO, Vec2::Y).unwrap().with_half_extent(2.0).unwrap();
    assert!(line.covers(Vec2::new(1.5, -1.0), Vec2::ZERO));
    assert!(!line.covers(Vec2::new(2.5, -1.0), Vec2::ZERO));
    assert!(Line::new(Vec2::ZERO, Vec2::Y).unwrap().with_half_extent(0.0).is_err());
}
