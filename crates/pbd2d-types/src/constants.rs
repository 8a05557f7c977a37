//! Simulation defaults and numerical thresholds.

/// Default number of steps per frame.
pub const DEFAULT_STEPS_COUNT: u32 = 2;

/// Default number of sub-steps per step.
pub const DEFAULT_SUBSTEPS_COUNT: u32 = 8;

/// Default sub-step duration (seconds).
pub const DEFAULT_DELTA_TIME: f32 = 0.001;

/// Default external acceleration applied to every body.
pub const DEFAULT_EXTERNAL_FORCE: [f32; 2] = [0.0, -10.0];

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Below this doubled area a triangle counts as degenerate.
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-10;

/// Below this determinant a 2×2 matrix is treated as singular.
pub const SINGULAR_DETERMINANT_THRESHOLD: f32 = 1.0e-12;
