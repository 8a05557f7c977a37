//! Canned scenarios — procedural bodies placed in a world.

use pbd2d_math::Vec2;
use pbd2d_mesh::generators::{quad_grid, straight_rod};
use pbd2d_mesh::Line;
use pbd2d_solver::{ShapeMatchingParams, SimulationConfig};
use pbd2d_types::{Pbd2dResult, PointId};
use pbd2d_world::{GroundLine, Rod, RodSettings, TriMesh, TriMeshSettings, World};

/// Which scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// A soft box dropped onto the ground.
    BoxOnGround,
    /// Two boxes dropped on top of each other.
    Stack,
    /// A rod falling onto a pinned box.
    RodOnMesh,
    /// A sheet pinned at its top corners.
    HangingSheet,
    /// A shape-matched box sliding down a tilted line.
    RigidSlide,
}

impl ScenarioKind {
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::BoxOnGround,
            ScenarioKind::Stack,
            ScenarioKind::RodOnMesh,
            ScenarioKind::HangingSheet,
            ScenarioKind::RigidSlide,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::BoxOnGround => "box_on_ground",
            ScenarioKind::Stack => "stack",
            ScenarioKind::RodOnMesh => "rod_on_mesh",
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::RigidSlide => "rigid_slide",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScenarioKind::BoxOnGround => "soft box dropped onto the ground",
            ScenarioKind::Stack => "two boxes stacked on the ground",
            ScenarioKind::RodOnMesh => "rod falling onto a pinned box",
            ScenarioKind::HangingSheet => "sheet pinned at its top corners",
            ScenarioKind::RigidSlide => "shape-matched box on a tilted line",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }

    /// Builds and materializes the scenario's world.
    pub fn build(&self, config: SimulationConfig) -> Pbd2dResult<World> {
        let mut world = World::new(config)?;
        let ground_friction = 0.4;

        match self {
            ScenarioKind::BoxOnGround => {
                let mesh = quad_grid(4, 4, 1.0, 1.0, Vec2::new(0.0, 1.0));
                world.insert_body(TriMesh::new("box", &mesh, &soft_settings())?);
                world.insert_body(GroundLine::horizontal("ground", 0.0, ground_friction)?);
            }
            ScenarioKind::Stack => {
                let lower = quad_grid(4, 4, 1.0, 1.0, Vec2::new(0.0, 0.6));
                let upper = quad_grid(4, 4, 0.8, 0.8, Vec2::new(0.1, 1.8));
                world.insert_body(TriMesh::new("lower", &lower, &soft_settings())?);
                world.insert_body(TriMesh::new("upper", &upper, &soft_settings())?);
                world.insert_body(GroundLine::horizontal("ground", 0.0, ground_friction)?);
            }
            ScenarioKind::RodOnMesh => {
                let mesh = quad_grid(4, 4, 1.0, 1.0, Vec2::new(0.0, 0.5));
                let point_count = mesh.point_count() as u32;
                let base = TriMeshSettings {
                    pinned: (0..point_count).map(PointId).collect(),
                    ..soft_settings()
                };
                let rod = straight_rod(Vec2::new(-0.8, 1.5), Vec2::new(0.6, 1.3), 12);
                let rod_settings = RodSettings {
                    collision_radius: 0.02,
                    friction: 0.2,
                    ..Default::default()
                };
                world.insert_body(TriMesh::new("base", &mesh, &base)?);
                world.insert_body(Rod::new("rod", &rod, &rod_settings)?);
            }
            ScenarioKind::HangingSheet => {
                let cols = 8;
                let mesh = quad_grid(cols, cols, 1.0, 1.0, Vec2::new(0.0, 1.0));
                let top_left = (cols * (cols + 1)) as u32;
                let top_right = top_left + cols as u32;
                let settings = TriMeshSettings {
                    pinned: vec![PointId(top_left), PointId(top_right)],
                    collide_with_ground: false,
                    ..soft_settings()
                };
                world.insert_body(TriMesh::new("sheet", &mesh, &settings)?);
            }
            ScenarioKind::RigidSlide => {
                let mesh = quad_grid(2, 2, 0.5, 0.5, Vec2::new(-1.0, 1.5));
                let settings = TriMeshSettings {
                    edge_length: None,
                    triangle_area: None,
                    shape_matching: Some(ShapeMatchingParams::default()),
                    friction: 0.1,
                    ..Default::default()
                };
                let slope = Line::new(Vec2::ZERO, Vec2::new(0.3, 1.0))?;
                world.insert_body(TriMesh::new("block", &mesh, &settings)?);
                world.insert_body(GroundLine::new("slope", slope, 0.1)?);
            }
        }

        world.materialize();
        Ok(world)
    }
}

fn soft_settings() -> TriMeshSettings {
    TriMeshSettings {
        collision_radius: 0.02,
        friction: 0.3,
        ..Default::default()
    }
}
