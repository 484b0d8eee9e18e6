//! HD44780 character display in 4-bit mode
//!
//! Drives a 16x2 display through six GPIO lines (register select, enable
//! strobe, four data lines). Each byte goes out as two nibbles; the
//! display latches a nibble on the falling edge of the enable strobe,
//! after the data lines have settled.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use thermograph_core::reading::DISPLAY_COLS;
use thermograph_core::traits::{Line, TextDisplay};

/// Command set (write-only wiring; the busy flag is never read back)
mod cmd {
    /// Function set bootstrap, first step of the 4-bit handshake
    pub const FUNCTION_SET_8BIT: u8 = 0x33;
    /// Function set, switches the interface to 4-bit
    pub const FUNCTION_SET_4BIT: u8 = 0x32;
    /// Entry mode: cursor moves right, no display shift
    pub const ENTRY_MODE: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Function set: 4-bit bus, 2 lines, 5x8 font
    pub const FUNCTION_SET_2LINE: u8 = 0x28;
    /// Clear display and home the cursor
    pub const CLEAR: u8 = 0x01;
}

/// Fixed initialization sequence, sent as commands in this order
const INIT_SEQUENCE: [u8; 5] = [
    cmd::FUNCTION_SET_8BIT,
    cmd::FUNCTION_SET_4BIT,
    cmd::ENTRY_MODE,
    cmd::DISPLAY_ON,
    cmd::FUNCTION_SET_2LINE,
];

/// Settle time before and after the enable pulse, in microseconds
///
/// The controller latches on the enable falling edge after this settle
/// window; 500 us is a hardware latency floor, not a tunable.
const SETTLE_US: u32 = 500;

/// Enable pulse width, in microseconds
const PULSE_US: u32 = 500;

/// HD44780 driver over six output lines
///
/// Stateless between calls apart from the pin assignment; the 32
/// character cells live on the display itself.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    d4: P,
    d5: P,
    d6: P,
    d7: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Take ownership of the six wired lines and the delay source
    ///
    /// The display is unusable until [`init`](Self::init) has run.
    pub fn new(rs: P, en: P, d4: P, d5: P, d6: P, d7: P, delay: D) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        }
    }

    /// Bootstrap the display into 4-bit, 2-line, 5x8 mode and clear it
    ///
    /// Also the recovery path after a pin error: a failed write can leave
    /// the controller mid-nibble, and re-running the bootstrap is the only
    /// way back to a known state.
    pub fn init(&mut self) -> Result<(), P::Error> {
        for command in INIT_SEQUENCE {
            self.write_byte(command, PinState::Low)?;
        }
        self.clear()
    }

    /// Blank the display and home the cursor
    pub fn clear(&mut self) -> Result<(), P::Error> {
        self.write_byte(cmd::CLEAR, PinState::Low)?;
        // Clear needs extra time beyond the strobe delays
        self.delay.delay_us(SETTLE_US);
        Ok(())
    }

    /// Render one row
    ///
    /// Pads with spaces or truncates to exactly the display width, then
    /// streams the cells as data; the controller auto-increments its
    /// cursor, so only the row address is sent.
    pub fn write_line(&mut self, text: &str, line: Line) -> Result<(), P::Error> {
        self.write_byte(line.address(), PinState::Low)?;

        let bytes = text.as_bytes();
        for cell in 0..DISPLAY_COLS {
            let ch = bytes.get(cell).copied().unwrap_or(b' ');
            self.write_byte(ch, PinState::High)?;
        }
        Ok(())
    }

    /// Send one byte, high nibble first
    ///
    /// RS low addresses the command register, RS high the data register;
    /// timing and nibble handling are identical for both.
    fn write_byte(&mut self, value: u8, rs: PinState) -> Result<(), P::Error> {
        self.rs.set_state(rs)?;
        self.write_nibble(value >> 4)?;
        self.write_nibble(value & 0x0F)
    }

    /// Present one nibble on D4-D7 and strobe it into the controller
    fn write_nibble(&mut self, nibble: u8) -> Result<(), P::Error> {
        // Clear every data line first so no bit survives from the
        // previous nibble, then raise the ones set here.
        self.d4.set_low()?;
        self.d5.set_low()?;
        self.d6.set_low()?;
        self.d7.set_low()?;

        if nibble & 0x01 != 0 {
            self.d4.set_high()?;
        }
        if nibble & 0x02 != 0 {
            self.d5.set_high()?;
        }
        if nibble & 0x04 != 0 {
            self.d6.set_high()?;
        }
        if nibble & 0x08 != 0 {
            self.d7.set_high()?;
        }

        self.pulse_enable()
    }

    /// Enable strobe: settle, raise, hold, drop, settle
    ///
    /// The controller latches on the falling edge; collapsing or
    /// reordering the phases garbles the latched nibble.
    fn pulse_enable(&mut self) -> Result<(), P::Error> {
        self.delay.delay_us(SETTLE_US);
        self.en.set_high()?;
        self.delay.delay_us(PULSE_US);
        self.en.set_low()?;
        self.delay.delay_us(SETTLE_US);
        Ok(())
    }
}

impl<P: OutputPin, D: DelayNs> TextDisplay for Hd44780<P, D> {
    type Error = P::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        Hd44780::clear(self)
    }

    fn write_line(&mut self, text: &str, line: Line) -> Result<(), Self::Error> {
        Hd44780::write_line(self, text, line)
    }
}
