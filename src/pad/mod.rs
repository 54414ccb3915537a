pub mod launch_pad;

pub use launch_pad::{LaunchPad, RocketRef, StepReport};
