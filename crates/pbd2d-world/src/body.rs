//! Simulated bodies.
//!
//! A body owns its point state, topology and constraint sets. The
//! registry only ever refers to a body by [`BodyId`](pbd2d_types::BodyId);
//! solvers get short-lived views built by [`Body::capsule_view`],
//! [`Body::point_view`] and [`Body::line_view`].

use pbd2d_contact::{CapsuleBody, LineBody, PointBody};
use pbd2d_math::Vec2;
use pbd2d_mesh::{CollidableEdge, Edge, Line, RodData, Topology, TriMeshData, Triangle};
use pbd2d_solver::{
    ConstraintSolver, EdgeLengthConstraints, PointState, ShapeMatchingConstraint,
    TriangleAreaConstraints,
};
use pbd2d_types::{CollidableEdgeId, EdgeId, IndexedVec, Pbd2dResult, TriangleId};

use crate::roles::Role;
use crate::settings::{validate_radius_friction, RodSettings, TriMeshSettings};

/// A deformable body made of triangles.
#[derive(Debug, Clone)]
pub struct TriMesh {
    pub name: String,
    pub state: PointState,
    pub triangles: IndexedVec<TriangleId, Triangle>,
    pub topology: Topology,
    /// Boundary edges.
    pub collidable_edges: IndexedVec<CollidableEdgeId, CollidableEdge>,
    pub edge_length: Option<EdgeLengthConstraints>,
    pub triangle_area: Option<TriangleAreaConstraints>,
    pub shape_matching: Option<ShapeMatchingConstraint>,
    pub collision_radius: f32,
    pub friction: f32,
    roles: Vec<Role>,
}

impl TriMesh {
    /// Builds the body and captures every rest value from `data.positions`.
    pub fn new(
        name: impl Into<String>,
        data: &TriMeshData,
        settings: &TriMeshSettings,
    ) -> Pbd2dResult<Self> {
        data.validate()?;
        settings.validate()?;

        let state = PointState::with_uniform_mass(
            data.positions.clone(),
            settings.point_mass,
            &settings.pinned,
        )?;
        let triangles: IndexedVec<TriangleId, Triangle> =
            data.triangles.iter().map(|&t| Triangle::from(t)).collect();
        let topology = Topology::build(&triangles);
        let collidable_edges = topology.external_edges.iter().copied().collect();

        let edge_length = settings
            .edge_length
            .map(|p| EdgeLengthConstraints::from_edges(topology.edges.iter(), &state.positions, p))
            .transpose()?;
        let triangle_area = settings
            .triangle_area
            .map(|p| TriangleAreaConstraints::from_triangles(triangles.iter(), &state.positions, p))
            .transpose()?;
        let shape_matching = settings
            .shape_matching
            .map(|p| ShapeMatchingConstraint::new(&state, p))
            .transpose()?;

        let mut roles = Vec::new();
        if settings.collide_with_trimeshes {
            roles.push(Role::TriMeshCapsules);
        }
        if settings.collide_with_rods {
            roles.push(Role::TriMeshCapsulesForRods);
        }
        if settings.collide_with_ground {
            roles.push(Role::TriMeshPoints);
        }

        let name = name.into();
        tracing::debug!(
            body = %name,
            points = state.point_count(),
            triangles = triangles.len(),
            boundary_edges = topology.boundary_edge_count(),
            "built trimesh"
        );

        Ok(Self {
            name,
            state,
            triangles,
            topology,
            collidable_edges,
            edge_length,
            triangle_area,
            shape_matching,
            collision_radius: settings.collision_radius,
            friction: settings.friction,
            roles,
        })
    }

    /// One projection pass of every constraint set, in declared order.
    pub fn project_constraints(&mut self, dt: f32) {
        let solvers: [Option<&mut dyn ConstraintSolver>; 3] = [
            self.edge_length.as_mut().map(|c| c as &mut dyn ConstraintSolver),
            self.triangle_area.as_mut().map(|c| c as &mut dyn ConstraintSolver),
            self.shape_matching.as_mut().map(|c| c as &mut dyn ConstraintSolver),
        ];
        for solver in solvers.into_iter().flatten() {
            solver.reset_multipliers();
            solver.project(&mut self.state, dt);
        }
    }
}

/// A chain of points joined by capsule edges.
#[derive(Debug, Clone)]
pub struct Rod {
    pub name: String,
    pub state: PointState,
    pub edges: IndexedVec<EdgeId, Edge>,
    pub collidable_edges: IndexedVec<CollidableEdgeId, CollidableEdge>,
    pub edge_length: Option<EdgeLengthConstraints>,
    pub collision_radius: f32,
    pub friction: f32,
    roles: Vec<Role>,
}

impl Rod {
    pub fn new(name: impl Into<String>, data: &RodData, settings: &RodSettings) -> Pbd2dResult<Self> {
        data.validate()?;
        settings.validate()?;

        let state = PointState::with_uniform_mass(
            data.positions.clone(),
            settings.point_mass,
            &settings.pinned,
        )?;
        let edges: IndexedVec<EdgeId, Edge> = data.edges.iter().map(|&e| Edge::from(e)).collect();
        let collidable_edges = edges.iter().copied().collect();
        let edge_length = settings
            .edge_length
            .map(|p| EdgeLengthConstraints::from_edges(edges.iter(), &state.positions, p))
            .transpose()?;

        let roles = if settings.collide_with_trimeshes {
            vec![Role::RodCapsules]
        } else {
            Vec::new()
        };

        let name = name.into();
        tracing::debug!(body = %name, points = state.point_count(), edges = edges.len(), "built rod");

        Ok(Self {
            name,
            state,
            edges,
            collidable_edges,
            edge_length,
            collision_radius: settings.collision_radius,
            friction: settings.friction,
            roles,
        })
    }

    pub fn project_constraints(&mut self, dt: f32) {
        if let Some(edge_length) = self.edge_length.as_mut() {
            edge_length.reset_multipliers();
            edge_length.project(&mut self.state, dt);
        }
    }
}

/// A static line other bodies rest on.
#[derive(Debug, Clone)]
pub struct GroundLine {
    pub name: String,
    pub line: Line,
    /// Translation applied to the line.
    pub displacement: Vec2,
    pub friction: f32,
}

impl GroundLine {
    pub fn new(name: impl Into<String>, line: Line, friction: f32) -> Pbd2dResult<Self> {
        validate_radius_friction(0.0, friction)?;
        Ok(Self {
            name: name.into(),
            line,
            displacement: Vec2::ZERO,
            friction,
        })
    }

    /// Horizontal ground at height `y`.
    pub fn horizontal(name: impl Into<String>, y: f32, friction: f32) -> Pbd2dResult<Self> {
        Self::new(name, Line::new(Vec2::new(0.0, y), Vec2::Y)?, friction)
    }
}

/// A body registered with a world.
#[derive(Debug, Clone)]
pub enum Body {
    TriMesh(TriMesh),
    Rod(Rod),
    GroundLine(GroundLine),
}

impl Body {
    pub fn name(&self) -> &str {
        match self {
            Body::TriMesh(b) => &b.name,
            Body::Rod(b) => &b.name,
            Body::GroundLine(b) => &b.name,
        }
    }

    /// Roles this body takes part in.
    pub fn roles(&self) -> &[Role] {
        const GROUND: &[Role] = &[Role::GroundLine];
        match self {
            Body::TriMesh(b) => b.roles.as_slice(),
            Body::Rod(b) => b.roles.as_slice(),
            Body::GroundLine(_) => GROUND,
        }
    }

    #[inline]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    pub fn friction(&self) -> f32 {
        match self {
            Body::TriMesh(b) => b.friction,
            Body::Rod(b) => b.friction,
            Body::GroundLine(b) => b.friction,
        }
    }

    /// Point state, for bodies that have points.
    pub fn state(&self) -> Option<&PointState> {
        match self {
            Body::TriMesh(b) => Some(&b.state),
            Body::Rod(b) => Some(&b.state),
            Body::GroundLine(_) => None,
        }
    }

    pub fn state_mut(&mut self) -> Option<&mut PointState> {
        match self {
            Body::TriMesh(b) => Some(&mut b.state),
            Body::Rod(b) => Some(&mut b.state),
            Body::GroundLine(_) => None,
        }
    }

    pub fn project_constraints(&mut self, dt: f32) {
        match self {
            Body::TriMesh(b) => b.project_constraints(dt),
            Body::Rod(b) => b.project_constraints(dt),
            Body::GroundLine(_) => {}
        }
    }

    /// Capsule view for a capsule role this body has.
    pub fn capsule_view(&mut self, role: Role) -> Option<CapsuleBody<'_>> {
        if !self.has_role(role) {
            return None;
        }
        match (self, role) {
            (Body::TriMesh(b), Role::TriMeshCapsules | Role::TriMeshCapsulesForRods) => {
                Some(CapsuleBody {
                    state: &mut b.state,
                    edges: &b.collidable_edges,
                    radius: b.collision_radius,
                    friction: b.friction,
                })
            }
            (Body::Rod(b), Role::RodCapsules) => Some(CapsuleBody {
                state: &mut b.state,
                edges: &b.collidable_edges,
                radius: b.collision_radius,
                friction: b.friction,
            }),
            _ => None,
        }
    }

    /// Point view, if the body has the `TriMeshPoints` role.
    pub fn point_view(&mut self) -> Option<PointBody<'_>> {
        match self {
            Body::TriMesh(b) if b.roles.contains(&Role::TriMeshPoints) => Some(PointBody {
                state: &mut b.state,
                radius: b.collision_radius,
                friction: b.friction,
            }),
            _ => None,
        }
    }

    pub fn line_view(&self) -> Option<LineBody<'_>> {
        match self {
            Body::GroundLine(b) => Some(LineBody {
                line: &b.line,
                displacement: b.displacement,
                friction: b.friction,
            }),
            _ => None,
        }
    }

    pub fn as_trimesh(&self) -> Option<&TriMesh> {
        match self {
            Body::TriMesh(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_rod(&self) -> Option<&Rod> {
        match self {
            Body::Rod(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_ground_line_mut(&mut self) -> Option<&mut GroundLine> {
        match self {
            Body::GroundLine(b) => Some(b),
            _ => None,
        }
    }
}

impl From<TriMesh> for Body {
    fn from(body: TriMesh) -> Self {
        Body::TriMesh(body)
    }
}

impl From<Rod> for Body {
    fn from(body: Rod) -> Self {
        Body::Rod(body)
    }
}

impl From<GroundLine> for Body {
    fn from(body: GroundLine) -> Self {
        Body::GroundLine(body)
    }
}
