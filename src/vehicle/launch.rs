use nalgebra::Point2;

use crate::error::LaunchError;

pub const MAX_ANGLE_DEG: f64 = 90.0;

// ---------------------------------------------------------------------------
// Launch configuration (immutable once built)
// ---------------------------------------------------------------------------

/// What the user configured for a rocket. This is all that gets persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    name: String,
    angle_deg: f64,      // above horizontal, [0, 90]
    velocity: f64,       // m/s, (0, max]
    start: Point2<f64>,  // m
}

impl LaunchConfig {
    /// Validate and build. `max_velocity` comes from the simulation config.
    pub fn new(
        name: impl Into<String>,
        angle_deg: f64,
        velocity: f64,
        start: Point2<f64>,
        max_velocity: f64,
    ) -> Result<Self, LaunchError> {
        if !angle_deg.is_finite() || !(0.0..=MAX_ANGLE_DEG).contains(&angle_deg) {
            return Err(LaunchError::InvalidAngle { angle: angle_deg });
        }
        if !velocity.is_finite() || velocity <= 0.0 || velocity > max_velocity {
            return Err(LaunchError::InvalidVelocity { velocity, max: max_velocity });
        }
        Ok(Self { name: name.into(), angle_deg, velocity, start })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn start(&self) -> Point2<f64> {
        self.start
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

pub mod presets {
    /// (name, angle°, velocity m/s) for a small demo salvo.
    pub const DEMO_SALVO: [(&str, f64, f64); 4] = [
        ("Alpha", 45.0, 90.0),
        ("Bravo", 60.0, 80.0),
        ("Charlie", 75.0, 70.0),
        ("Delta", 30.0, 100.0),
    ];
}
