//! Character display trait

/// Display rows, addressed by their fixed DDRAM offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Top row
    One,
    /// Bottom row
    Two,
}

impl Line {
    /// DDRAM address command selecting this row
    pub fn address(self) -> u8 {
        match self {
            Line::One => 0x80,
            Line::Two => 0xC0,
        }
    }
}

/// Trait for line-oriented text displays
///
/// Writes are fire-and-forget: the hardware has no acknowledgment channel,
/// so the only failures come from the underlying pin primitive. After an
/// error the visual state is indeterminate and the display must be
/// re-initialized before further writes.
pub trait TextDisplay {
    /// Error type of the underlying output primitive
    type Error;

    /// Blank the display and return the cursor home
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Render one row, padded or truncated to the display width
    fn write_line(&mut self, text: &str, line: Line) -> Result<(), Self::Error>;
}
