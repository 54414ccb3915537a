use std::sync::Arc;

use nalgebra::Point2;

use crate::config::SimConfig;
use crate::error::LaunchError;
use crate::sim::event::EventLog;
use crate::vehicle::{FlightPhase, LaunchConfig, Rocket, RocketId};

/// How to pick a rocket for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocketRef<'a> {
    Id(RocketId),
    Name(&'a str),
}

/// Outcome of one `LaunchPad::step`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    pub advanced: usize,
    pub left_bounds: Vec<RocketId>,
}

// ---------------------------------------------------------------------------
// Launch pad: ordered rocket collection + shared anchor
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct LaunchPad {
    rockets: Vec<Rocket>,
    anchor: Point2<f64>,
    config: SimConfig,
    log: Arc<EventLog>,
    next_id: u64,
}

impl LaunchPad {
    pub fn new(config: SimConfig, log: Arc<EventLog>) -> Self {
        Self {
            rockets: Vec::new(),
            anchor: config.anchor,
            config,
            log,
            next_id: 1,
        }
    }

    /// Build a rocket at the current anchor and append it.
    /// On error the collection is untouched and nothing is logged.
    pub fn add_rocket(
        &mut self,
        name: impl Into<String>,
        angle_deg: f64,
        velocity: f64,
    ) -> Result<&Rocket, LaunchError> {
        let config = LaunchConfig::new(
            name,
            angle_deg,
            velocity,
            self.anchor,
            self.config.max_velocity,
        )?;
        Ok(self.push(config))
    }

    /// Place an already validated configuration on the pad.
    pub(crate) fn push(&mut self, config: LaunchConfig) -> &Rocket {
        let id = RocketId(self.next_id);
        self.next_id += 1;
        let index = self.rockets.len();
        self.rockets.push(Rocket::new(id, config, Arc::clone(&self.log)));
        &self.rockets[index]
    }

    /// Remove the first rocket matching `which`. Returns whether one was removed.
    pub fn remove_rocket(&mut self, which: RocketRef<'_>) -> bool {
        let pos = self.rockets.iter().position(|r| match which {
            RocketRef::Id(id) => r.id() == id,
            RocketRef::Name(name) => r.name() == name,
        });
        match pos {
            Some(i) => {
                let removed = self.rockets.remove(i);
                self.log.log_event(format!("Rocket {} removed", removed.name()));
                true
            }
            None => false,
        }
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    /// Mutable access to individual rockets; membership stays fixed.
    pub fn rockets_mut(&mut self) -> &mut [Rocket] {
        &mut self.rockets
    }

    pub fn get(&self, id: RocketId) -> Option<&Rocket> {
        self.rockets.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: RocketId) -> Option<&mut Rocket> {
        self.rockets.iter_mut().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.rockets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rockets.is_empty()
    }

    pub fn launch_all(&mut self) {
        for rocket in &mut self.rockets {
            rocket.launch();
        }
    }

    pub fn anchor(&self) -> Point2<f64> {
        self.anchor
    }

    /// Only affects rockets added afterwards.
    pub fn set_anchor(&mut self, anchor: Point2<f64>) {
        self.anchor = anchor;
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn log(&self) -> &Arc<EventLog> {
        &self.log
    }

    /// One tick of the driver contract: advance every launched rocket that
    /// is still in bounds, then retire those that have just left.
    pub fn step(&mut self) -> StepReport {
        let SimConfig { tick_dt, gravity, bounds, .. } = self.config;
        let mut report = StepReport::default();

        for rocket in &mut self.rockets {
            if rocket.launched() && rocket.in_bounds(&bounds) {
                rocket.advance(tick_dt, gravity);
                report.advanced += 1;
            }
            if rocket.phase() == FlightPhase::InFlight && !rocket.in_bounds(&bounds) {
                rocket.mark_out_of_bounds();
                let p = rocket.position();
                self.log.log_event(format!(
                    "Rocket {} left bounds at ({:.2}, {:.2}) after {:.2}s",
                    rocket.name(),
                    p.x,
                    p.y,
                    rocket.elapsed(),
                ));
                report.left_bounds.push(rocket.id());
            }
        }

        report
    }

    /// True once no rocket is still flying.
    pub fn is_settled(&self) -> bool {
        self.rockets.iter().all(|r| r.phase() != FlightPhase::InFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;

    fn pad() -> LaunchPad {
        let config = SimConfig {
            bounds: Bounds::new(200.0, 100.0),
            anchor: Point2::new(10.0, 0.0),
            max_velocity: 100.0,
            ..SimConfig::default()
        };
        LaunchPad::new(config, EventLog::new())
    }

    #[test]
    fn add_anchors_at_current_anchor() {
        let mut p = pad();
        let r = p.add_rocket("A", 45.0, 30.0).unwrap();
        assert!(!r.launched());
        assert_eq!(r.position(), Point2::new(10.0, 0.0));

        p.set_anchor(Point2::new(40.0, 5.0));
        p.add_rocket("B", 45.0, 30.0).unwrap();
        assert_eq!(p.rockets()[0].config().start(), Point2::new(10.0, 0.0));
        assert_eq!(p.rockets()[1].config().start(), Point2::new(40.0, 5.0));
    }

    #[test]
    fn invalid_rocket_leaves_pad_unchanged() {
        let mut p = pad();
        p.add_rocket("A", 45.0, 30.0).unwrap();
        let logged = p.log().len();
        assert!(p.add_rocket("Bad", 91.0, 30.0).is_err());
        assert!(p.add_rocket("Bad", 45.0, 0.0).is_err());
        assert!(p.add_rocket("Bad", 45.0, 100.1).is_err());
        assert_eq!(p.len(), 1);
        assert_eq!(p.log().len(), logged);
    }

    #[test]
    fn add_returns_the_rocket_just_pushed() {
        let mut p = pad();
        let a = p.add_rocket("A", 30.0, 20.0).unwrap().id();
        let b = p.add_rocket("B", 60.0, 25.0).unwrap();
        assert_eq!(b.name(), "B");
        assert_ne!(b.id(), a);
        let b = b.id();
        assert_eq!(p.rockets().last().map(Rocket::id), Some(b));
    }

    #[test]
    fn remove_first_match_by_name() {
        let mut p = pad();
        let first = p.add_rocket("Twin", 30.0, 20.0).unwrap().id();
        let second = p.add_rocket("Twin", 60.0, 20.0).unwrap().id();
        assert!(p.remove_rocket(RocketRef::Name("Twin")));
        assert_eq!(p.len(), 1);
        assert!(p.get(first).is_none());
        assert!(p.get(second).is_some());
        assert!(!p.remove_rocket(RocketRef::Name("Missing")));
    }

    #[test]
    fn remove_by_id() {
        let mut p = pad();
        p.add_rocket("A", 30.0, 20.0).unwrap();
        let b = p.add_rocket("B", 30.0, 20.0).unwrap().id();
        assert!(p.remove_rocket(RocketRef::Id(b)));
        assert!(!p.remove_rocket(RocketRef::Id(b)));
        assert_eq!(p.rockets()[0].name(), "A");
    }

    #[test]
    fn launch_all_launches_every_rocket() {
        let mut p = pad();
        p.add_rocket("A", 30.0, 20.0).unwrap();
        p.add_rocket("B", 60.0, 20.0).unwrap();
        p.launch_all();
        assert!(p.rockets().iter().all(Rocket::launched));
    }

    #[test]
    fn step_skips_unlaunched_rockets() {
        let mut p = pad();
        let a = p.add_rocket("A", 45.0, 30.0).unwrap().id();
        let b = p.add_rocket("B", 45.0, 30.0).unwrap().id();
        p.get_mut(a).unwrap().launch();
        let report = p.step();
        assert_eq!(report.advanced, 1);
        assert_eq!(p.get(a).unwrap().ticks(), 1);
        assert_eq!(p.get(b).unwrap().ticks(), 0);
        assert!(!p.is_settled());
    }

    #[test]
    fn leaving_bounds_is_logged_once_and_freezes_rocket() {
        let mut p = pad();
        let id = p.add_rocket("Lob", 45.0, 30.0).unwrap().id();
        p.launch_all();

        let mut exit_tick = None;
        for tick in 0..10_000 {
            let report = p.step();
            if report.left_bounds.contains(&id) {
                exit_tick = Some(tick);
                break;
            }
        }
        assert!(exit_tick.is_some(), "rocket should eventually leave bounds");

        let frozen = p.get(id).unwrap().position();
        let ticks = p.get(id).unwrap().ticks();
        for _ in 0..5 {
            let report = p.step();
            assert_eq!(report.advanced, 0);
            assert!(report.left_bounds.is_empty());
        }
        let r = p.get(id).unwrap();
        assert_eq!(r.position(), frozen);
        assert_eq!(r.ticks(), ticks);
        assert_eq!(r.phase(), FlightPhase::OutOfBounds);
        assert!(r.launched());
        assert!(p.is_settled());

        let exits = p
            .log()
            .iter()
            .filter(|e| e.description().contains("left bounds"))
            .count();
        assert_eq!(exits, 1);
    }
}
