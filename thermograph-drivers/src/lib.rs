//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermograph-core:
//!
//! - MCP3008 SPI analog-to-digital converter (10-bit, 8 channels)
//! - Linear analog temperature sensor on one converter input
//! - HD44780 character display in 4-bit mode
//!
//! Drivers are generic over `embedded-hal` traits, so they run against
//! fake pins and buses on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod display;
pub mod sensor;
