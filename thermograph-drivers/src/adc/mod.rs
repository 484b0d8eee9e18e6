//! Analog-to-digital converter drivers

pub mod mcp3008;

pub use mcp3008::{AdcError, Mcp3008};
