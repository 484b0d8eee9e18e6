//! Inter-task communication
//!
//! Static embassy-sync primitives shared between the sampling task and
//! anything observing it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Latest temperature reading in centi-degrees, or None for a failed cycle
pub static TEMP_READING: Signal<CriticalSectionRawMutex, Option<i32>> = Signal::new();

/// Cooperative stop request for the sampling task
///
/// Checked only between sampling iterations, never inside a display
/// write, so the display is never abandoned mid-nibble.
pub static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();
