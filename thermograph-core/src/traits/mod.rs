//! Hardware abstraction traits
//!
//! These traits define the interface between the sampling logic and
//! hardware-specific implementations.

pub mod display;
pub mod log;
pub mod sensor;

pub use display::{Line, TextDisplay};
pub use log::{LogError, ReadingLog};
pub use sensor::{SensorError, TemperatureSensor};
