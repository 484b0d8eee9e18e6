//! Sampling task
//!
//! The single orchestration loop: read the sensor, render both display
//! rows, append a log record. Iterations are strictly sequential - the
//! converter and the display share the cycle, so a new read never starts
//! until the previous display update has finished.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Delay, Duration, Instant, Ticker};
use embedded_hal_bus::spi::ExclusiveDevice;

use thermograph_core::config::MonitorConfig;
use thermograph_core::reading::{format_log_line, format_temperature};
use thermograph_core::traits::{Line, ReadingLog, TemperatureSensor};
use thermograph_drivers::display::Hd44780;
use thermograph_drivers::sensor::LinearSensor;

use crate::channels::{SHUTDOWN, TEMP_READING};
use crate::log::ConsoleLog;

/// SPI device handle the MCP3008 sits behind
type AdcSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>;

/// The board's sensor pipeline
pub type BoardSensor = LinearSensor<AdcSpi>;

/// The board's display
pub type BoardDisplay = Hd44780<Output<'static>, Delay>;

/// Sampling task - one full read/render/log cycle per tick
#[embassy_executor::task]
pub async fn sample_task(
    mut sensor: BoardSensor,
    mut display: BoardDisplay,
    mut log: ConsoleLog,
    config: MonitorConfig,
) {
    info!(
        "Sampling task started (channel {}, period {}s)",
        config.channel, config.sample_period_s
    );

    let mut ticker = Ticker::every(Duration::from_secs(config.sample_period_s as u64));
    let started = Instant::now();

    loop {
        // Stop only between iterations, never mid-write
        if SHUTDOWN.try_take().is_some() {
            info!("Sampling task stopping");
            let _ = display.clear();
            break;
        }

        match sensor.read_centi_celsius() {
            Ok(centi_c) => {
                let rendered = format_temperature(centi_c);

                if display.write_line("Temperature", Line::One).is_err()
                    || display.write_line(&rendered, Line::Two).is_err()
                {
                    // Indeterminate visual state after a failed write;
                    // bootstrap again before the next render.
                    warn!("Display write failed, reinitializing");
                    let _ = display.init();
                }

                let record = format_log_line(started.elapsed().as_secs(), centi_c);
                if log.append(&record).is_err() {
                    warn!("Reading log rejected a record");
                }

                TEMP_READING.signal(Some(centi_c));
            }
            Err(e) => {
                warn!("Sensor read failed: {}", e);
                TEMP_READING.signal(None);
            }
        }

        ticker.next().await;
    }
}
