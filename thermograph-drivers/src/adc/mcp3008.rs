//! MCP3008 SPI analog-to-digital converter
//!
//! 10-bit, 8-channel converter sampled over a ~1 MHz SPI link. Each read
//! is one 3-byte full-duplex exchange: start bit, single-ended channel
//! select, then a padding byte while the converter clocks the result out.

use embedded_hal::spi::SpiDevice;

/// Number of single-ended input channels
pub const CHANNELS: u8 = 8;

/// Largest code the 10-bit converter can produce
pub const FULL_SCALE: u16 = 1023;

/// Start bit of the command frame
const START: u8 = 0x01;

/// Single-ended mode flag, ORed with the channel number
const SINGLE_ENDED: u8 = 0x08;

/// Errors from a channel read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError<E> {
    /// Channel outside the converter's input range, rejected before any
    /// bus traffic
    InvalidChannel(u8),
    /// SPI exchange failed
    Bus(E),
}

/// MCP3008 driver
///
/// Owns the SPI device handle (bus + chip select), so one driver maps to
/// one converter chip. No retries: a bus failure surfaces to the caller
/// as a failed read.
pub struct Mcp3008<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Mcp3008<SPI> {
    /// Create a new driver over a configured SPI device
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Sample one single-ended channel
    ///
    /// The converter returns its result straddling the last two response
    /// bytes, with only the low 2 bits of the second byte significant, so
    /// the sample is masked to [0, 1023] no matter what the bus carried
    /// in the unused bits.
    pub fn read_channel(&mut self, channel: u8) -> Result<u16, AdcError<SPI::Error>> {
        if channel >= CHANNELS {
            return Err(AdcError::InvalidChannel(channel));
        }

        let command = [START, (SINGLE_ENDED | channel) << 4, 0x00];
        let mut response = [0u8; 3];
        self.spi
            .transfer(&mut response, &command)
            .map_err(AdcError::Bus)?;

        Ok(u16::from(response[1] & 0x03) << 8 | u16::from(response[2]))
    }

    /// Release the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}
