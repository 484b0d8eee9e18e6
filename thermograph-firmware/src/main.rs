//! Thermograph - LCD temperature monitor firmware
//!
//! Main firmware binary for RP2040-based boards: an MCP3008 on SPI0 reads
//! the analog sensor, an HD44780 16x2 display on six GPIO outputs shows
//! the latest reading, and every cycle is appended to the reading log.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use {defmt_rtt as _, panic_probe as _};

use thermograph_core::config::MonitorConfig;
use thermograph_core::traits::Line;
use thermograph_drivers::adc::Mcp3008;
use thermograph_drivers::display::Hd44780;
use thermograph_drivers::sensor::LinearSensor;

mod channels;
mod log;
mod tasks;

/// SPI clock for the MCP3008 (datasheet ceiling is 1.35 MHz at 2.7 V)
const ADC_SPI_HZ: u32 = 1_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Thermograph firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = MonitorConfig::default();

    // SPI0 wiring for the MCP3008 (standard Pico header pins:
    // SCK=GPIO18, MOSI=GPIO19, MISO=GPIO16, CS=GPIO17)
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = ADC_SPI_HZ;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let adc_spi = ExclusiveDevice::new(spi, cs, Delay).unwrap();

    let sensor = match LinearSensor::new(Mcp3008::new(adc_spi), config.channel, config.model) {
        Ok(sensor) => sensor,
        Err(e) => {
            error!("Sensor configuration rejected: {}", e);
            panic!("invalid sensor configuration");
        }
    };
    info!("ADC and sensor initialized (channel {})", config.channel);

    // Display wiring: RS=GPIO15, E=GPIO14, D4-D7=GPIO10-13
    let mut display = Hd44780::new(
        Output::new(p.PIN_15, Level::Low),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
        Delay,
    );

    // Pin failures here are fatal: the display cannot come up without
    // all six lines.
    display.init().unwrap();
    info!("Display initialized");

    display.write_line("Welcome", Line::One).unwrap();
    Timer::after_secs(2).await;
    display.clear().unwrap();

    spawner
        .spawn(tasks::sample_task(sensor, display, log::ConsoleLog, config))
        .unwrap();

    info!("Sampling task spawned, firmware running");

    // Main task has nothing else to do - all work happens in the
    // sampling task.
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
