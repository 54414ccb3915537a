use std::fmt;
use std::sync::Arc;

use nalgebra::Point2;

use super::flight::{FlightPhase, FlightState};
use super::launch::LaunchConfig;
use crate::config::Bounds;
use crate::physics::projectile;
use crate::sim::event::EventLog;

/// Pad-local identity, distinct from the (non-unique) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RocketId(pub u64);

impl fmt::Display for RocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Rocket: launch configuration + flight state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Rocket {
    id: RocketId,
    config: LaunchConfig,
    flight: FlightState,
    log: Arc<EventLog>,
}

impl Rocket {
    /// Place a validated configuration on the pad and record its creation.
    pub fn new(id: RocketId, config: LaunchConfig, log: Arc<EventLog>) -> Self {
        let start = config.start();
        log.log_event(format!(
            "Rocket {} created (angle {}°, velocity {}, start ({}, {}))",
            config.name(),
            config.angle_deg(),
            config.velocity(),
            start.x,
            start.y,
        ));
        Self { id, config, flight: FlightState::on_pad(start), log }
    }

    /// Ignite. Only the first call has any effect.
    pub fn launch(&mut self) {
        if self.flight.launched() {
            return;
        }
        self.flight.phase = FlightPhase::InFlight;
        self.flight.elapsed = 0.0;
        self.flight.ticks = 0;
        self.log.log_event(format!("Rocket {} launched", self.config.name()));
    }

    /// One simulation tick of `dt` seconds under gravity `g`.
    ///
    /// Position is re-derived from the closed-form trajectory at
    /// `t = ticks * dt`, so error does not accumulate across ticks.
    /// Callers must only advance launched rockets that are in bounds;
    /// a rocket still on the pad is left untouched.
    pub fn advance(&mut self, dt: f64, g: f64) {
        if !self.flight.launched() {
            return;
        }
        self.flight.ticks += 1;
        self.flight.elapsed = self.flight.ticks as f64 * dt;
        let d = projectile::displacement(
            self.config.angle_deg(),
            self.config.velocity(),
            g,
            self.flight.elapsed,
        );
        self.flight.position = self.config.start() + d;
        tracing::debug!(
            rocket = %self.id,
            t = self.flight.elapsed,
            x = self.flight.position.x,
            y = self.flight.position.y,
            "advanced"
        );
    }

    pub fn in_bounds(&self, bounds: &Bounds) -> bool {
        bounds.contains(&self.flight.position)
    }

    /// Record that the rocket has left the region; it stays inert from here.
    pub(crate) fn mark_out_of_bounds(&mut self) {
        self.flight.phase = FlightPhase::OutOfBounds;
    }

    pub fn id(&self) -> RocketId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    pub fn launched(&self) -> bool {
        self.flight.launched()
    }

    pub fn phase(&self) -> FlightPhase {
        self.flight.phase
    }

    pub fn position(&self) -> Point2<f64> {
        self.flight.position
    }

    pub fn elapsed(&self) -> f64 {
        self.flight.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.flight.ticks
    }
}
