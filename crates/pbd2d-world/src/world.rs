//! The step driver.
//!
//! Per sub-step, in this order:
//!
//! 1. Predict every body's points under the external force and damping.
//! 2. Per body in registration order, one projection pass of each
//!    constraint set (edge length, triangle area, shape matching).
//! 3. Per record in creation order, refresh capsule candidates through
//!    the broad phase and run the narrow-phase solver.
//! 4. Update velocities from the sub-step displacement.

use pbd2d_contact::{BroadPhase, ContactResult, ExhaustiveBroadPhase};
use pbd2d_solver::SimulationConfig;
use pbd2d_types::{BodyId, Pbd2dError, Pbd2dResult};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::registry::{Collisions, InteractionRecord, InteractionRegistry};
use crate::store::BodyStore;

/// Summary of one [`World::step`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Sub-steps executed.
    pub substeps: u32,
    /// Live interaction records.
    pub records: usize,
    /// Contact statistics summed over every sub-step.
    pub contacts: ContactResult,
    /// Contacts resolved by the last sub-step.
    pub last_contact_count: usize,
    /// Total kinetic energy after the step (J).
    pub kinetic_energy: f64,
}

/// Owns the bodies, the interaction registry and the broad phase.
pub struct World {
    config: SimulationConfig,
    bodies: BodyStore,
    registry: InteractionRegistry,
    broad_phase: Box<dyn BroadPhase>,
}

impl World {
    /// Creates an empty world; fails on an invalid configuration.
    pub fn new(config: SimulationConfig) -> Pbd2dResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: BodyStore::new(),
            registry: InteractionRegistry::new(),
            broad_phase: Box::new(ExhaustiveBroadPhase::default()),
        })
    }

    /// Replaces the broad phase used to fill capsule candidate lists.
    pub fn with_broad_phase(mut self, broad_phase: impl BroadPhase + 'static) -> Self {
        self.broad_phase = Box::new(broad_phase);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SimulationConfig) -> Pbd2dResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn bodies(&self) -> &BodyStore {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn registry(&self) -> &InteractionRegistry {
        &self.registry
    }

    pub fn records(&self) -> &[InteractionRecord] {
        self.registry.records()
    }

    /// Mutable records, e.g. to fill candidate lists by hand. Only the
    /// collision buffers of a record can change.
    pub fn records_mut(&mut self) -> &mut [InteractionRecord] {
        self.registry.records_mut()
    }

    /// Registers a body without creating records for it.
    ///
    /// Use during initial construction, then call [`World::materialize`].
    pub fn insert_body(&mut self, body: impl Into<Body>) -> BodyId {
        let body = body.into();
        let name = body.name().to_owned();
        let id = self.bodies.insert(body);
        tracing::debug!(?id, body = %name, "registered body");
        id
    }

    /// Creates the records of every qualifying body pair.
    pub fn materialize(&mut self) -> usize {
        self.registry.materialize(&self.bodies)
    }

    /// Registers a body and creates its records right away.
    pub fn add_body(&mut self, body: impl Into<Body>) -> BodyId {
        let id = self.insert_body(body);
        self.registry.materialize_for(&self.bodies, id);
        id
    }

    /// Drops every record of `id`, then removes the body.
    pub fn remove_body(&mut self, id: BodyId) -> Pbd2dResult<Body> {
        if !self.bodies.contains(id) {
            return Err(Pbd2dError::UnknownBody(id));
        }
        self.registry.invalidate(id);
        let body = self.bodies.remove(id).ok_or(Pbd2dError::UnknownBody(id))?;
        tracing::debug!(?id, body = %body.name(), "removed body");
        Ok(body)
    }

    /// Total kinetic energy of every body (J).
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .filter_map(|(_, b)| b.state())
            .map(|s| s.kinetic_energy())
            .sum()
    }

    /// Advances `steps_count × substeps_count` sub-steps.
    pub fn step(&mut self) -> Pbd2dResult<StepReport> {
        let mut report = StepReport::default();
        for _ in 0..self.config.steps_count {
            for _ in 0..self.config.substeps_count {
                let pass = self.substep()?;
                report.contacts.merge(&pass);
                report.last_contact_count = pass.resolved_count as usize;
                report.substeps += 1;
            }
        }
        report.records = self.registry.len();
        report.kinetic_energy = self.kinetic_energy();
        Ok(report)
    }

    fn substep(&mut self) -> Pbd2dResult<ContactResult> {
        let dt = self.config.delta_time;
        let force = self.config.external_force();
        let damping = self.config.global_damping;

        if let Some(missing) = self.registry.missing_body(&self.bodies) {
            return Err(Pbd2dError::UnknownBody(missing));
        }

        for (_, body) in self.bodies.iter_mut() {
            if let Some(state) = body.state_mut() {
                state.predict(dt, force, damping);
            }
        }

        for (_, body) in self.bodies.iter_mut() {
            body.project_constraints(dt);
        }

        let mut result = ContactResult::default();
        for record in self.registry.records_mut() {
            let def = record.def();
            let (first_id, second_id) = (record.first(), record.second());
            let missing = if self.bodies.contains(first_id) { second_id } else { first_id };
            let (first, second) = self
                .bodies
                .pair_mut(first_id, second_id)
                .ok_or(Pbd2dError::UnknownBody(missing))?;

            let pass = match &mut record.collisions {
                Collisions::CapsuleCapsule(collisions) => {
                    let (Some(mut a), Some(mut b)) =
                        (first.capsule_view(def.first), second.capsule_view(def.second))
                    else {
                        continue;
                    };
                    self.broad_phase.find_pairs(
                        &a.shape(),
                        &b.shape(),
                        &mut collisions.potential_collisions,
                    );
                    collisions.solve(&mut a, &mut b)
                }
                Collisions::PointLine(collisions) => {
                    let (Some(mut points), Some(line)) = (first.point_view(), second.line_view())
                    else {
                        continue;
                    };
                    collisions.solve(&mut points, &line)
                }
            };
            result.merge(&pass);
        }
        tracing::trace!(contacts = result.resolved_count, "sub-step collisions");

        for (_, body) in self.bodies.iter_mut() {
            if let Some(state) = body.state_mut() {
                state.update_velocities(dt);
            }
        }

        Ok(result)
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("config", &self.config)
            .field("bodies", &self.bodies.len())
            .field("records", &self.registry.len())
            .field("broad_phase", &self.broad_phase.name())
            .finish()
    }
}
