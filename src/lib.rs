pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod pad;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use config::{Bounds, SimConfig};
pub use error::{LaunchError, PersistError};
pub use pad::{LaunchPad, RocketRef, StepReport};
pub use sim::{Event, EventLog, RunOutcome, Scheduler};
pub use vehicle::{FlightPhase, LaunchConfig, Rocket, RocketId};
