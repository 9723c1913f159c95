pub mod curve;
pub mod simulator;

pub use curve::{display_percent, ProgressConfigError, ProgressCurve, HOLD_AT};
pub use simulator::{ProgressHandle, ProgressSimulator, TICK_PERIOD};
