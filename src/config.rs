use std::{env, time::Duration};

use nalgebra::Point2;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2

// ---------------------------------------------------------------------------
// Simulated region
// ---------------------------------------------------------------------------

/// Visible region rockets fly in. Origin at the left end of the ground line,
/// y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,  // m
    pub height: f64, // m
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive on every edge: a rocket sitting on the ground line is inside.
    pub fn contains(&self, p: &Point2<f64>) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub tick_dt: f64,            // simulated seconds per tick
    pub tick_interval: Duration, // wall-clock cadence of the scheduler
    pub gravity: f64,            // m/s^2
    pub max_velocity: f64,       // m/s, upper bound for launch velocity
    pub bounds: Bounds,
    pub anchor: Point2<f64>,     // default pad anchor
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_dt: 0.01,                             // 100 Hz
            tick_interval: Duration::from_millis(10),
            gravity: G0,
            max_velocity: 150.0,
            bounds: Bounds::new(1000.0, 600.0),
            anchor: Point2::new(50.0, 0.0),
        }
    }
}

impl SimConfig {
    /// Defaults overridden by `LAUNCHPAD_*` environment variables.
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = env_parse::<u64>("LAUNCHPAD_TICK_MS") {
            config.tick_interval = Duration::from_millis(ms);
        }
        if let Some(dt) = env_parse::<f64>("LAUNCHPAD_TICK_DT").filter(|dt| *dt > 0.0) {
            config.tick_dt = dt;
        }
        if let Some(v) = env_parse::<f64>("LAUNCHPAD_MAX_VELOCITY").filter(|v| *v > 0.0) {
            config.max_velocity = v;
        }
        if let Some(w) = env_parse::<f64>("LAUNCHPAD_WIDTH").filter(|w| *w > 0.0) {
            config.bounds.width = w;
        }
        if let Some(h) = env_parse::<f64>("LAUNCHPAD_HEIGHT").filter(|h| *h > 0.0) {
            config.bounds.height = h;
        }
        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(100.0, 50.0);
        assert!(b.contains(&Point2::new(0.0, 0.0)));
        assert!(b.contains(&Point2::new(100.0, 50.0)));
        assert!(!b.contains(&Point2::new(100.1, 10.0)));
        assert!(!b.contains(&Point2::new(10.0, -0.001)));
        assert!(!b.contains(&Point2::new(-1.0, 10.0)));
    }

    #[test]
    fn default_anchor_is_on_the_ground_inside_bounds() {
        let c = SimConfig::default();
        assert_eq!(c.anchor.y, 0.0);
        assert!(c.bounds.contains(&c.anchor));
    }
}
