//! Point–line collisions.
//!
//! Keeps the points of a body at least `radius` above a static line.
//! The line has infinite mass, so the whole correction goes to the
//! point. Points behind the line are pushed back along its normal
//! however deep they are.

use pbd2d_types::PointId;
use serde::{Deserialize, Serialize};

use crate::contact::PointLineContact;
use crate::friction::{slip_direction, tangential};
use crate::response::ContactResult;
use crate::views::{LineBody, PointBody};

/// Collision data of one point-body/line pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointLineCollisions {
    /// Friction coefficient of the pair.
    pub friction: f32,
    /// Contacts found by the last pass.
    pub contacts: Vec<PointLineContact>,
}

impl PointLineCollisions {
    pub fn new(friction: f32) -> Self {
        Self {
            friction,
            contacts: Vec::new(),
        }
    }

    /// Projects every movable point within `radius` of the line.
    pub fn solve(&mut self, points: &mut PointBody<'_>, line: &LineBody<'_>) -> ContactResult {
        self.contacts.clear();
        let mut result = ContactResult::default();
        let normal = line.line.normal;
        let state = &mut *points.state;

        for i in state.predicted_positions.ids() {
            if state.masses_inv[i] == 0.0 {
                continue;
            }
            let p = state.predicted_positions[i];
            if !line.line.covers(p, line.displacement) {
                continue;
            }
            let distance = line.line.signed_distance(p, line.displacement);
            if distance >= points.radius {
                continue;
            }

            let depth = points.radius - distance;
            state.predicted_positions[i] += normal * depth;
            self.contacts.push(PointLineContact { point: i, distance });

            result.resolved_count += 1;
            result.max_penetration = result.max_penetration.max(depth);
            result.total_normal_correction += depth;

            if self.friction > 0.0 {
                let delta = state.predicted_positions[i] - state.positions[i];
                if let Some((direction, slip)) = slip_direction(tangential(delta, normal)) {
                    let correction = slip.min(self.friction * depth);
                    state.predicted_positions[i] -= direction * correction;
                    result.total_friction_correction += correction;
                }
            }
        }

        tracing::trace!(contacts = self.contacts.len(), "point-line pass");
        result
    }

    /// Points touched by the last pass.
    pub fn contact_points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.contacts.iter().map(|c| c.point)
    }
}
