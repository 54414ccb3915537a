pub mod projectile;

pub use projectile::{apex_height, displacement, range, time_of_flight};
