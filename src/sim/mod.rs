pub mod event;
pub mod scheduler;

pub use event::{Event, EventLog};
pub use scheduler::{RunOutcome, Scheduler};
