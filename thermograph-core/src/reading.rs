//! Reading formatting
//!
//! Renders centi-degree readings into the fixed-width display line and the
//! flat log record format.

use core::fmt::Write;

use heapless::String;

/// Character cells per display row
pub const DISPLAY_COLS: usize = 16;

/// Capacity of one log record (uptime prefix + temperature)
pub const LOG_LINE_LEN: usize = 32;

/// Format a reading for a display row, e.g. `25.16 *C`
///
/// The display driver pads the result to the full row width.
pub fn format_temperature(centi_c: i32) -> String<DISPLAY_COLS> {
    let mut out = String::new();
    let sign = if centi_c < 0 { "-" } else { "" };
    let magnitude = centi_c.unsigned_abs();
    let _ = write!(out, "{}{}.{:02} *C", sign, magnitude / 100, magnitude % 100);
    out
}

/// Format one append-only log record, e.g. `00:02:05: 25.16 *C`
///
/// The timestamp is uptime in `HH:MM:SS` - the board has no wall clock.
pub fn format_log_line(uptime_secs: u64, centi_c: i32) -> String<LOG_LINE_LEN> {
    let hours = uptime_secs / 3600;
    let minutes = (uptime_secs / 60) % 60;
    let seconds = uptime_secs % 60;

    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}:{:02}: ", hours, minutes, seconds);
    let _ = out.push_str(&format_temperature(centi_c));
    out
}
