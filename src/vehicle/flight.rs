use nalgebra::Point2;

/// Where a rocket is in its lifecycle. Never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    OnPad,
    InFlight,
    OutOfBounds,
}

/// Live simulation state, reset on every reload.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub position: Point2<f64>, // m
    pub elapsed: f64,          // s since launch
    pub ticks: u64,
    pub phase: FlightPhase,
}

impl FlightState {
    pub fn on_pad(start: Point2<f64>) -> Self {
        Self { position: start, elapsed: 0.0, ticks: 0, phase: FlightPhase::OnPad }
    }

    pub fn launched(&self) -> bool {
        self.phase != FlightPhase::OnPad
    }
}
