//! Temperature sensor implementations

pub mod linear;

pub use linear::LinearSensor;
