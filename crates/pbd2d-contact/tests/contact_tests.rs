//! Integration tests for pbd2d-contact.

use pbd2d_contact::{
    BroadPhase, CapsuleBody, CapsuleCapsuleCollisions, ContactResult, EdgeEdgeContactInfo,
    EdgePair, ExhaustiveBroadPhase, LineBody, NullBroadPhase, PointBody, PointLineCollisions,
};
use pbd2d_math::Vec2;
use pbd2d_mesh::{CollidableEdge, Edge, Line};
use pbd2d_solver::PointState;
use pbd2d_types::{CollidableEdgeId, IndexedVec, PointId};

const TOL: f32 = 1e-5;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn capsule_state(positions: [Vec2; 2], predicted: [Vec2; 2]) -> PointState {
    let mut state = PointState::new(positions.to_vec(), vec![1.0, 1.0]).unwrap();
    for (slot, p) in state.predicted_positions.iter_mut().zip(predicted) {
        *slot = p;
    }
    state
}

fn single_edge() -> IndexedVec<CollidableEdgeId, CollidableEdge> {
    IndexedVec::from_vec(vec![Edge::from([0, 1])])
}

fn capsule<'a>(
    state: &'a mut PointState,
    edges: &'a IndexedVec<CollidableEdgeId, CollidableEdge>,
) -> CapsuleBody<'a> {
    CapsuleBody {
        state,
        edges,
        radius: 1.0,
        friction: 0.0,
    }
}

fn single_candidate(friction: f32) -> CapsuleCapsuleCollisions {
    let mut collisions = CapsuleCapsuleCollisions::new(friction);
    collisions.potential_collisions.push(EdgePair::from((0, 0)));
    collisions
}

fn assert_points(actual: &IndexedVec<PointId, Vec2>, expected: &[Vec2]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((*a - *e).length() < TOL, "point {i}: {a} != {e}");
    }
}

// ─── Capsule–Capsule Tests ────────────────────────────────────

#[test]
fn orthogonal_capsules_record_one_contact() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();
    let a = capsule(&mut sa, &edges);
    let b = capsule(&mut sb, &edges);

    let mut collisions = single_candidate(0.0);
    collisions.detect(&a, &b);

    let expected = EdgeEdgeContactInfo::new(
        0.5,
        v(1.0, 0.0),
        CollidableEdgeId::ZERO,
        CollidableEdgeId::ZERO,
    );
    assert_eq!(collisions.collisions, vec![expected]);
}

#[test]
fn orthogonal_capsules_are_pushed_apart() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();
    let mut collisions = single_candidate(0.0);

    let result = collisions.solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));

    assert_eq!(result.resolved_count, 1);
    assert!((result.max_penetration - 1.0).abs() < TOL);
    assert_points(
        &sa.predicted_positions,
        &[v(0.0, -1.0 / 3.0), v(10.0, -1.0 / 3.0)],
    );
    assert_points(
        &sb.predicted_positions,
        &[v(5.0, 1.0 + 2.0 / 3.0), v(5.0, 10.0)],
    );
}

#[test]
fn capsule_correction_preserves_momentum() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, 1.0), v(5.0, 10.0)]);
    let before = sa.predicted_mass_moment() + sb.predicted_mass_moment();
    let edges = single_edge();

    single_candidate(0.0).solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));

    let after = sa.predicted_mass_moment() + sb.predicted_mass_moment();
    assert!((after - before).length() < TOL);
}

#[test]
fn parallel_capsules_settle_after_two_passes() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(0.0, 1.0), v(10.0, 1.0)]);
    let edges = single_edge();
    let mut collisions = single_candidate(0.0);

    // Parallel segments have no unique closest pair; the first pass
    // only separates one end.
    for _ in 0..2 {
        collisions.solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));
    }
    assert_points(&sa.predicted_positions, &[v(0.0, -0.5), v(10.0, -0.5)]);
    assert_points(&sb.predicted_positions, &[v(0.0, 1.5), v(10.0, 1.5)]);

    let result = collisions.solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));
    assert_eq!(result, ContactResult::default());
    assert!(collisions.collisions.is_empty());
    assert_points(&sa.predicted_positions, &[v(0.0, -0.5), v(10.0, -0.5)]);
}

#[test]
fn friction_cancels_tangential_slip() {
    let mut sa = capsule_state([v(-1.0, 0.0), v(9.0, 0.0)], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([v(5.0, 2.0), v(5.0, 10.0)], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();

    single_candidate(100.0).solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));

    assert_points(
        &sa.predicted_positions,
        &[v(-1.0 / 3.0, -1.0 / 3.0), v(10.0 - 1.0 / 3.0, -1.0 / 3.0)],
    );
    assert_points(
        &sb.predicted_positions,
        &[v(5.0 + 2.0 / 3.0, 1.0 + 2.0 / 3.0), v(5.0, 10.0)],
    );
}

#[test]
fn friction_is_clamped_by_normal_multiplier() {
    let mut sa = capsule_state([v(-1.0, 0.0), v(9.0, 0.0)], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([v(5.0, 2.0), v(5.0, 10.0)], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();

    let result = single_candidate(0.1)
        .solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));

    // λ_n = 2/3, so λ_t = 0.1 · 2/3 instead of the nulling 2/3.
    let lambda_t = 0.1 * 2.0 / 3.0;
    assert!((result.total_friction_correction - lambda_t).abs() < TOL);
    assert!((sa.predicted_positions[PointId(0)].x + 0.5 * lambda_t).abs() < TOL);
    assert!((sb.predicted_positions[PointId(0)].x - (5.0 + lambda_t)).abs() < TOL);
}

#[test]
fn large_friction_never_reverses_slip() {
    let mut sa = capsule_state([v(-1.0, 0.0), v(9.0, 0.0)], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([v(5.0, 2.0), v(5.0, 10.0)], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();

    single_candidate(1.0e6).solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));

    // Contact point on A (s = 0.5) and on B (t = 0) move together in x.
    let slip_a = (sa.predicted_positions[PointId(0)].x - sa.positions[PointId(0)].x
        + sa.predicted_positions[PointId(1)].x
        - sa.positions[PointId(1)].x)
        * 0.5;
    let slip_b = sb.predicted_positions[PointId(0)].x - sb.positions[PointId(0)].x;
    assert!((slip_a - slip_b).abs() < TOL);
}

#[test]
fn distant_capsules_do_not_collide() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, 2.5), v(5.0, 10.0)]);
    let edges = single_edge();
    let mut collisions = single_candidate(0.5);

    let result = collisions.solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));
    assert_eq!(result.resolved_count, 0);
    assert!(collisions.collisions.is_empty());
    assert_points(&sb.predicted_positions, &[v(5.0, 2.5), v(5.0, 10.0)]);
}

#[test]
fn pinned_capsule_moves_only_the_other_body() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    sa.masses_inv[PointId(0)] = 0.0;
    sa.masses_inv[PointId(1)] = 0.0;
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();

    single_candidate(0.0).solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));

    assert_points(&sa.predicted_positions, &[v(0.0, 0.0), v(10.0, 0.0)]);
    assert_points(&sb.predicted_positions, &[v(5.0, 2.0), v(5.0, 10.0)]);
}

#[test]
fn crossing_capsules_separate_along_edge_normal() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, -1.0), v(5.0, 1.0)]);
    let edges = single_edge();

    single_candidate(0.0).solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));

    assert_points(&sa.predicted_positions, &[v(0.0, -1.0), v(10.0, -1.0)]);
    assert_points(&sb.predicted_positions, &[v(5.0, 0.0), v(5.0, 2.0)]);
}

#[test]
fn contacts_are_rebuilt_every_pass() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();
    let mut collisions = single_candidate(0.0);

    collisions.solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));
    assert_eq!(collisions.collisions.len(), 1);

    sb.predicted_positions[PointId(0)] = v(5.0, 4.0);
    collisions.solve(&mut capsule(&mut sa, &edges), &mut capsule(&mut sb, &edges));
    assert!(collisions.collisions.is_empty());
}

// ─── Broad Phase Tests ────────────────────────────────────────

#[test]
fn null_broad_phase_keeps_caller_pairs() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(0.0, 50.0), v(10.0, 50.0)]);
    let edges = single_edge();
    let a = capsule(&mut sa, &edges);
    let b = capsule(&mut sb, &edges);

    let mut pairs = vec![EdgePair::from((0, 0))];
    let mut broad = NullBroadPhase;
    broad.find_pairs(&a.shape(), &b.shape(), &mut pairs);
    assert_eq!(pairs.len(), 1);
    assert_eq!(broad.name(), "null_broad_phase");
}

#[test]
fn exhaustive_broad_phase_culls_distant_edges() {
    let positions = vec![v(0.0, 0.0), v(1.0, 0.0), v(20.0, 0.0), v(21.0, 0.0)];
    let mut sa = PointState::new(positions, vec![1.0; 4]).unwrap();
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(0.5, 1.5), v(0.5, 3.0)]);
    let edges_a: IndexedVec<CollidableEdgeId, CollidableEdge> =
        IndexedVec::from_vec(vec![Edge::from([0, 1]), Edge::from([2, 3])]);
    let edges_b = single_edge();
    let a = capsule(&mut sa, &edges_a);
    let b = capsule(&mut sb, &edges_b);

    let mut pairs = vec![EdgePair::from((7, 7))];
    let mut broad = ExhaustiveBroadPhase::new(0.1);
    broad.find_pairs(&a.shape(), &b.shape(), &mut pairs);
    assert_eq!(pairs, vec![EdgePair::from((0, 0))]);
}

#[test]
fn exhaustive_broad_phase_feeds_narrow_phase() {
    let mut sa = capsule_state([Vec2::ZERO; 2], [v(0.0, 0.0), v(10.0, 0.0)]);
    let mut sb = capsule_state([Vec2::ZERO; 2], [v(5.0, 1.0), v(5.0, 10.0)]);
    let edges = single_edge();
    let mut a = capsule(&mut sa, &edges);
    let mut b = capsule(&mut sb, &edges);

    let mut collisions = CapsuleCapsuleCollisions::new(0.0);
    ExhaustiveBroadPhase::default().find_pairs(
        &a.shape(),
        &b.shape(),
        &mut collisions.potential_collisions,
    );
    let result = collisions.solve(&mut a, &mut b);
    assert_eq!(result.resolved_count, 1);
}

// ─── Point–Line Tests ─────────────────────────────────────────

fn ground() -> Line {
    Line::new(Vec2::ZERO, v(0.0, 1.0)).unwrap()
}

fn point_state(positions: &[Vec2], predicted: &[Vec2]) -> PointState {
    let mut state = PointState::new(positions.to_vec(), vec![1.0; positions.len()]).unwrap();
    for (slot, p) in state.predicted_positions.iter_mut().zip(predicted) {
        *slot = *p;
    }
    state
}

fn solve_point_line(
    state: &mut PointState,
    line: &Line,
    displacement: Vec2,
    radius: f32,
    friction: f32,
) -> (PointLineCollisions, ContactResult) {
    let mut collisions = PointLineCollisions::new(friction);
    let mut points = PointBody {
        state,
        radius,
        friction,
    };
    let line = LineBody {
        line,
        displacement,
        friction,
    };
    let result = collisions.solve(&mut points, &line);
    (collisions, result)
}

#[test]
fn point_below_line_is_lifted_to_radius() {
    let mut state = point_state(&[v(0.0, 1.0), v(3.0, 1.0)], &[v(0.0, -0.5), v(3.0, 0.5)]);
    let (collisions, result) = solve_point_line(&mut state, &ground(), Vec2::ZERO, 0.1, 0.0);

    assert_points(&state.predicted_positions, &[v(0.0, 0.1), v(3.0, 0.5)]);
    assert_eq!(result.resolved_count, 1);
    assert!((result.max_penetration - 0.6).abs() < TOL);
    assert_eq!(collisions.contact_points().collect::<Vec<_>>(), vec![PointId(0)]);
    assert!((collisions.contacts[0].distance + 0.5).abs() < TOL);
}

#[test]
fn pinned_point_ignores_line() {
    let mut state = point_state(&[v(0.0, -1.0)], &[v(0.0, -1.0)]);
    state.masses_inv[PointId(0)] = 0.0;
    let (collisions, _) = solve_point_line(&mut state, &ground(), Vec2::ZERO, 0.1, 0.0);

    assert!(collisions.contacts.is_empty());
    assert_eq!(state.predicted_positions[PointId(0)], v(0.0, -1.0));
}

#[test]
fn line_displacement_moves_the_surface() {
    let mut state = point_state(&[v(0.0, 3.0)], &[v(0.0, 1.5)]);
    let (_, result) = solve_point_line(&mut state, &ground(), v(0.0, 2.0), 0.0, 0.0);

    assert_eq!(result.resolved_count, 1);
    assert_points(&state.predicted_positions, &[v(0.0, 2.0)]);
}

#[test]
fn bounded_line_ignores_points_past_its_ends() {
    let line = ground().with_half_extent(1.0).unwrap();
    let mut state = point_state(&[v(0.5, 1.0), v(5.0, 1.0)], &[v(0.5, -0.5), v(5.0, -0.5)]);
    solve_point_line(&mut state, &line, Vec2::ZERO, 0.0, 0.0);

    assert_points(&state.predicted_positions, &[v(0.5, 0.0), v(5.0, -0.5)]);
}

#[test]
fn point_line_friction_is_clamped() {
    let mut state = point_state(&[v(0.0, 0.5)], &[v(1.0, -0.5)]);
    solve_point_line(&mut state, &ground(), Vec2::ZERO, 0.0, 0.5);
    // Depth 0.5, so at most 0.25 of the unit slip is removed.
    assert_points(&state.predicted_positions, &[v(0.75, 0.0)]);

    let mut state = point_state(&[v(0.0, 0.5)], &[v(1.0, -0.5)]);
    solve_point_line(&mut state, &ground(), Vec2::ZERO, 0.0, 10.0);
    assert_points(&state.predicted_positions, &[v(0.0, 0.0)]);
}

#[test]
fn contact_info_serializes_edge_handles() {
    let info = EdgeEdgeContactInfo::new(0.25, v(0.5, 0.5), CollidableEdgeId(3), CollidableEdgeId(4));
    let json = serde_json::to_string(&info).unwrap();
    assert!(json.contains("\"edge_a\":3"));
    let back: EdgeEdgeContactInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}
