//! Per-body parameters.
//!
//! Both settings types deserialize with defaults for every missing
//! field, so scenario files only list what they change.

use pbd2d_solver::{ConstraintParams, ShapeMatchingParams};
use pbd2d_types::{Pbd2dError, Pbd2dResult, PointId};
use serde::{Deserialize, Serialize};

/// Parameters of a triangle mesh body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriMeshSettings {
    /// Mass of every point (kg).
    pub point_mass: f32,
    /// Immovable points.
    pub pinned: Vec<PointId>,
    /// Edge length constraints on every unique edge; `None` disables them.
    pub edge_length: Option<ConstraintParams>,
    /// Triangle area constraints on every triangle; `None` disables them.
    pub triangle_area: Option<ConstraintParams>,
    /// Whole-body shape matching; off by default.
    pub shape_matching: Option<ShapeMatchingParams>,
    /// Capsule and point collision radius.
    pub collision_radius: f32,
    pub friction: f32,
    pub collide_with_trimeshes: bool,
    pub collide_with_rods: bool,
    pub collide_with_ground: bool,
}

impl Default for TriMeshSettings {
    fn default() -> Self {
        Self {
            point_mass: 1.0,
            pinned: Vec::new(),
            edge_length: Some(ConstraintParams::default()),
            triangle_area: Some(ConstraintParams::default()),
            shape_matching: None,
            collision_radius: 0.05,
            friction: 0.0,
            collide_with_trimeshes: true,
            collide_with_rods: true,
            collide_with_ground: true,
        }
    }
}

impl TriMeshSettings {
    pub fn validate(&self) -> Pbd2dResult<()> {
        validate_body_params(self.point_mass, self.collision_radius, self.friction)?;
        if let Some(params) = &self.edge_length {
            params.validate()?;
        }
        if let Some(params) = &self.triangle_area {
            params.validate()?;
        }
        if let Some(params) = &self.shape_matching {
            params.validate()?;
        }
        Ok(())
    }
}

/// Parameters of a rod body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RodSettings {
    pub point_mass: f32,
    pub pinned: Vec<PointId>,
    pub edge_length: Option<ConstraintParams>,
    pub collision_radius: f32,
    pub friction: f32,
    pub collide_with_trimeshes: bool,
}

impl Default for RodSettings {
    fn default() -> Self {
        Self {
            point_mass: 1.0,
            pinned: Vec::new(),
            edge_length: Some(ConstraintParams::default()),
            collision_radius: 0.05,
            friction: 0.0,
            collide_with_trimeshes: true,
        }
    }
}

impl RodSettings {
    pub fn validate(&self) -> Pbd2dResult<()> {
        validate_body_params(self.point_mass, self.collision_radius, self.friction)?;
        if let Some(params) = &self.edge_length {
            params.validate()?;
        }
        Ok(())
    }
}

fn validate_body_params(point_mass: f32, radius: f32, friction: f32) -> Pbd2dResult<()> {
    if !(point_mass > 0.0 && point_mass.is_finite()) {
        return Err(Pbd2dError::InvalidConfig(format!(
            "point_mass must be positive, got {point_mass}"
        )));
    }
    validate_radius_friction(radius, friction)
}

/// Rejects negative or non-finite collision radius and friction.
pub(crate) fn validate_radius_friction(radius: f32, friction: f32) -> Pbd2dResult<()> {
    if !(radius >= 0.0 && radius.is_finite()) {
        return Err(Pbd2dError::InvalidConfig(format!(
            "collision_radius must be non-negative, got {radius}"
        )));
    }
    if !(friction >= 0.0 && friction.is_finite()) {
        return Err(Pbd2dError::InvalidConfig(format!(
            "friction must be non-negative, got {friction}"
        )));
    }
    Ok(())
}
