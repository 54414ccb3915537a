use std::thread;
use std::time::{Duration, Instant};

use crate::pad::{LaunchPad, StepReport};

// ---------------------------------------------------------------------------
// Tick scheduler
// ---------------------------------------------------------------------------

/// Owns the tick cadence and drives `LaunchPad::step` once per tick.
/// Knows nothing about any UI toolkit's timer.
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    tick: u64,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Settled { ticks: u64 },
    TickLimit { ticks: u64 },
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, tick: 0 }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks driven so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn tick(&mut self, pad: &mut LaunchPad) -> StepReport {
        self.tick += 1;
        let report = pad.step();
        for id in &report.left_bounds {
            tracing::debug!(tick = self.tick, rocket = %id, "rocket left bounds");
        }
        report
    }

    /// Tick as fast as possible until every rocket is settled or
    /// `max_ticks` have run.
    pub fn run(&mut self, pad: &mut LaunchPad, max_ticks: u64) -> RunOutcome {
        self.run_inner(pad, max_ticks, false)
    }

    /// Same as `run`, sleeping so ticks land on the configured interval.
    pub fn run_realtime(&mut self, pad: &mut LaunchPad, max_ticks: u64) -> RunOutcome {
        self.run_inner(pad, max_ticks, true)
    }

    fn run_inner(&mut self, pad: &mut LaunchPad, max_ticks: u64, realtime: bool) -> RunOutcome {
        let start = self.tick;
        let mut next = Instant::now();
        while self.tick - start < max_ticks {
            if pad.is_settled() {
                return RunOutcome::Settled { ticks: self.tick - start };
            }
            self.tick(pad);
            if realtime {
                next += self.interval;
                if let Some(wait) = next.checked_duration_since(Instant::now()) {
                    thread::sleep(wait);
                }
            }
        }
        if pad.is_settled() {
            RunOutcome::Settled { ticks: self.tick - start }
        } else {
            tracing::warn!(max_ticks, "tick limit reached with rockets still in flight");
            RunOutcome::TickLimit { ticks: self.tick - start }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::event::EventLog;

    fn launched_pad() -> LaunchPad {
        let mut pad = LaunchPad::new(SimConfig::default(), EventLog::new());
        pad.add_rocket("A", 45.0, 40.0).unwrap();
        pad.add_rocket("B", 70.0, 30.0).unwrap();
        pad.launch_all();
        pad
    }

    #[test]
    fn tick_counts_and_steps() {
        let mut pad = launched_pad();
        let mut s = Scheduler::new(Duration::from_millis(10));
        let report = s.tick(&mut pad);
        assert_eq!(s.ticks(), 1);
        assert_eq!(report.advanced, 2);
        assert!(pad.rockets().iter().all(|r| r.ticks() == 1));
    }

    #[test]
    fn tick_reports_exits_once() {
        let mut pad = LaunchPad::new(SimConfig::default(), EventLog::new());
        let id = pad.add_rocket("Flat", 0.0, 40.0).unwrap().id();
        pad.launch_all();
        let mut s = Scheduler::new(Duration::from_millis(10));
        assert_eq!(s.tick(&mut pad).left_bounds, vec![id]);
        assert!(s.tick(&mut pad).left_bounds.is_empty());
        let exits = pad
            .log()
            .iter()
            .filter(|e| e.description().contains("left bounds"))
            .count();
        assert_eq!(exits, 1);
    }

    #[test]
    fn run_until_settled() {
        let mut pad = launched_pad();
        let mut s = Scheduler::new(Duration::from_millis(10));
        let outcome = s.run(&mut pad, 100_000);
        assert!(matches!(outcome, RunOutcome::Settled { .. }));
        assert!(pad.is_settled());
    }

    #[test]
    fn run_stops_at_tick_limit() {
        let mut pad = launched_pad();
        let mut s = Scheduler::new(Duration::from_millis(10));
        assert_eq!(s.run(&mut pad, 3), RunOutcome::TickLimit { ticks: 3 });
        assert_eq!(pad.rockets()[0].ticks(), 3);
    }

    #[test]
    fn nothing_launched_is_already_settled() {
        let mut pad = LaunchPad::new(SimConfig::default(), EventLog::new());
        pad.add_rocket("Idle", 45.0, 40.0).unwrap();
        let mut s = Scheduler::new(Duration::from_millis(10));
        assert_eq!(s.run(&mut pad, 10), RunOutcome::Settled { ticks: 0 });
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn realtime_run_respects_interval() {
        let mut pad = launched_pad();
        let mut s = Scheduler::new(Duration::from_millis(2));
        let started = Instant::now();
        s.run_realtime(&mut pad, 5);
        assert!(started.elapsed() >= Duration::from_millis(8));
    }
}
