pub mod flight;
pub mod launch;
pub mod rocket;

pub use flight::{FlightPhase, FlightState};
pub use launch::{presets, LaunchConfig};
pub use rocket::{Rocket, RocketId};
