pub mod alarm;

pub use alarm::{Alarm, Direction};
