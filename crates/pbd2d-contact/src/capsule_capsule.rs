//! Capsule–capsule collisions between the collidable edges of two bodies.
//!
//! Every collidable edge is a capsule: the segment between its points
//! swept by the body's collision radius. Each pass:
//!
//! 1. Closest points for every candidate pair on predicted positions;
//!    pairs closer than `r_A + r_B` become [`EdgeEdgeContactInfo`]s.
//! 2. Each contact is projected apart along the contact normal, with
//!    the correction spread over the four endpoints by their
//!    barycentric weights and inverse masses.
//! 3. Relative tangential slip of the contact points is removed up to
//!    the Coulomb limit `μ·λ_n`.

use pbd2d_math::geometry::closest_points_segment_segment;
use pbd2d_math::Vec2;
use pbd2d_types::constants::EPSILON;
use pbd2d_types::PointId;
use serde::{Deserialize, Serialize};

use crate::broad::EdgePair;
use crate::contact::EdgeEdgeContactInfo;
use crate::friction::{coulomb_clamp, slip_direction, tangential};
use crate::response::ContactResult;
use crate::views::CapsuleBody;

/// Collision data of one body pair: candidates in, contacts out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapsuleCapsuleCollisions {
    /// Friction coefficient of the pair.
    pub friction: f32,
    /// Candidate edge pairs, filled by the broad phase.
    pub potential_collisions: Vec<EdgePair>,
    /// Contacts found by the last pass.
    pub collisions: Vec<EdgeEdgeContactInfo>,
}

impl CapsuleCapsuleCollisions {
    pub fn new(friction: f32) -> Self {
        Self {
            friction,
            ..Default::default()
        }
    }

    /// Rebuilds the contact list from the candidates.
    pub fn detect(&mut self, a: &CapsuleBody<'_>, b: &CapsuleBody<'_>) {
        self.collisions.clear();
        let shape_a = a.shape();
        let shape_b = b.shape();
        let min_distance = a.radius + b.radius;

        for pair in &self.potential_collisions {
            let (a0, a1) = shape_a.segment(pair.a);
            let (b0, b1) = shape_b.segment(pair.b);
            let closest = closest_points_segment_segment(a0, a1, b0, b1, EPSILON);
            if closest.distance() < min_distance {
                self.collisions.push(EdgeEdgeContactInfo::new(
                    closest.s,
                    Vec2::new(1.0 - closest.t, closest.t),
                    pair.a,
                    pair.b,
                ));
            }
        }
    }

    /// Projects every recorded contact, in record order.
    pub fn resolve(&self, a: &mut CapsuleBody<'_>, b: &mut CapsuleBody<'_>) -> ContactResult {
        let mut result = ContactResult::default();
        for contact in &self.collisions {
            resolve_contact(contact, a, b, self.friction, &mut result);
        }
        result
    }

    /// Detects then resolves; the whole pass for one sub-step.
    pub fn solve(&mut self, a: &mut CapsuleBody<'_>, b: &mut CapsuleBody<'_>) -> ContactResult {
        self.detect(a, b);
        let result = self.resolve(a, b);
        tracing::trace!(
            candidates = self.potential_collisions.len(),
            contacts = self.collisions.len(),
            "capsule-capsule pass"
        );
        result
    }
}

fn resolve_contact(
    contact: &EdgeEdgeContactInfo,
    a: &mut CapsuleBody<'_>,
    b: &mut CapsuleBody<'_>,
    mu: f32,
    result: &mut ContactResult,
) {
    let ids_a: [PointId; 2] = a.edges[contact.edge_a].points();
    let ids_b: [PointId; 2] = b.edges[contact.edge_b].points();
    let ca = contact.weights_a();
    let cb = contact.weights_b();

    let pred_a = ids_a.map(|i| a.state.predicted_positions[i]);
    let pred_b = ids_b.map(|i| b.state.predicted_positions[i]);
    let w_a = ids_a.map(|i| a.state.masses_inv[i]);
    let w_b = ids_b.map(|i| b.state.masses_inv[i]);

    let point_a = pred_a[0] * ca[0] + pred_a[1] * ca[1];
    let point_b = pred_b[0] * cb[0] + pred_b[1] * cb[1];
    let offset = point_b - point_a;
    let distance = offset.length();
    let c = distance - (a.radius + b.radius);
    if c >= 0.0 {
        return;
    }

    let w_sum = w_a[0] * ca[0] * ca[0]
        + w_a[1] * ca[1] * ca[1]
        + w_b[0] * cb[0] * cb[0]
        + w_b[1] * cb[1] * cb[1];
    if !(w_sum > 0.0) {
        return;
    }

    let normal = if distance > EPSILON {
        offset / distance
    } else {
        crossing_normal(pred_a, pred_b)
    };

    let lambda_n = -c / w_sum;
    for k in 0..2 {
        a.state.predicted_positions[ids_a[k]] -= normal * (w_a[k] * ca[k] * lambda_n);
        b.state.predicted_positions[ids_b[k]] += normal * (w_b[k] * cb[k] * lambda_n);
    }

    result.resolved_count += 1;
    result.max_penetration = result.max_penetration.max(-c);
    result.total_normal_correction += lambda_n;

    if mu <= 0.0 {
        return;
    }

    let delta = contact_displacement(a, ids_a, ca) - contact_displacement(b, ids_b, cb);
    let Some((direction, slip)) = slip_direction(tangential(delta, normal)) else {
        return;
    };

    let lambda_t = coulomb_clamp(slip, w_sum, mu, lambda_n);
    for k in 0..2 {
        a.state.predicted_positions[ids_a[k]] -= direction * (w_a[k] * ca[k] * lambda_t);
        b.state.predicted_positions[ids_b[k]] += direction * (w_b[k] * cb[k] * lambda_t);
    }
    result.total_friction_correction += lambda_t;
}

/// Displacement of a contact point over the sub-step.
fn contact_displacement(body: &CapsuleBody<'_>, ids: [PointId; 2], weights: [f32; 2]) -> Vec2 {
    let state = &body.state;
    ids.iter()
        .zip(weights)
        .map(|(&i, c)| (state.predicted_positions[i] - state.positions[i]) * c)
        .sum()
}

/// Normal for segments that intersect: edge A's perpendicular, turned
/// towards the midpoint of edge B.
fn crossing_normal(pred_a: [Vec2; 2], pred_b: [Vec2; 2]) -> Vec2 {
    let normal = (pred_a[1] - pred_a[0]).perp().try_normalize().unwrap_or(Vec2::Y);
    let mid_a = (pred_a[0] + pred_a[1]) * 0.5;
    let mid_b = (pred_b[0] + pred_b[1]) * 0.5;
    if (mid_b - mid_a).dot(normal) < 0.0 {
        -normal
    } else {
        normal
    }
}
