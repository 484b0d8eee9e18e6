//! Linear analog temperature sensor
//!
//! An LM35-class sensor wired to one MCP3008 input. The sensor response
//! is linear in the measured voltage, so a single [`SensorModel`]
//! calibration turns raw codes into temperatures.

use embedded_hal::spi::SpiDevice;

use thermograph_core::convert::{convert, SensorModel};
use thermograph_core::traits::{SensorError, TemperatureSensor};

use crate::adc::{mcp3008::CHANNELS, AdcError, Mcp3008};

/// Analog sensor on one converter channel
pub struct LinearSensor<SPI> {
    adc: Mcp3008<SPI>,
    channel: u8,
    model: SensorModel,
}

impl<SPI: SpiDevice> LinearSensor<SPI> {
    /// Bind a converter channel to a calibration
    ///
    /// Channel and model are validated here, before any hardware access;
    /// reads can then only fail on the bus.
    pub fn new(adc: Mcp3008<SPI>, channel: u8, model: SensorModel) -> Result<Self, SensorError> {
        if channel >= CHANNELS {
            return Err(SensorError::InvalidChannel);
        }
        if !model.is_valid() {
            return Err(SensorError::InvalidModel);
        }
        Ok(Self {
            adc,
            channel,
            model,
        })
    }

    /// Raw 10-bit code from the converter, uncalibrated
    pub fn read_raw(&mut self) -> Result<u16, SensorError> {
        self.adc.read_channel(self.channel).map_err(|e| match e {
            AdcError::InvalidChannel(_) => SensorError::InvalidChannel,
            AdcError::Bus(_) => SensorError::Bus,
        })
    }

    /// The calibration in use
    pub fn model(&self) -> &SensorModel {
        &self.model
    }
}

impl<SPI: SpiDevice> TemperatureSensor for LinearSensor<SPI> {
    fn read_centi_celsius(&mut self) -> Result<i32, SensorError> {
        let sample = self.read_raw()?;
        Ok(convert(sample, &self.model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::{Error, ErrorKind, ErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    impl Error for BusFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Mock SPI playing back one canned converter response
    struct FixedSpi {
        response: [u8; 3],
        fail: bool,
    }

    impl ErrorType for FixedSpi {
        type Error = BusFault;
    }

    impl SpiDevice for FixedSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), BusFault> {
            if self.fail {
                return Err(BusFault);
            }
            for op in operations {
                if let Operation::Transfer(read, _) = op {
                    read.copy_from_slice(&self.response[..read.len()]);
                }
            }
            Ok(())
        }
    }

    fn adc_reading(raw: u16) -> Mcp3008<FixedSpi> {
        Mcp3008::new(FixedSpi {
            response: [0, (raw >> 8) as u8, raw as u8],
            fail: false,
        })
    }

    #[test]
    fn test_read_pipeline() {
        // Raw 78 under the LM35 calibration is 25.16°C
        let mut sensor = LinearSensor::new(adc_reading(78), 0, SensorModel::LM35).unwrap();
        assert_eq!(sensor.read_centi_celsius(), Ok(2516));
        assert_eq!(sensor.read_celsius(), Ok(25));
    }

    #[test]
    fn test_rejects_invalid_channel() {
        let result = LinearSensor::new(adc_reading(0), 8, SensorModel::LM35);
        assert!(matches!(result, Err(SensorError::InvalidChannel)));
    }

    #[test]
    fn test_rejects_invalid_model() {
        let broken = SensorModel {
            full_scale: 0,
            ..SensorModel::LM35
        };
        let result = LinearSensor::new(adc_reading(0), 0, broken);
        assert!(matches!(result, Err(SensorError::InvalidModel)));
    }

    #[test]
    fn test_bus_error_maps_to_sensor_error() {
        let adc = Mcp3008::new(FixedSpi {
            response: [0; 3],
            fail: true,
        });
        let mut sensor = LinearSensor::new(adc, 0, SensorModel::LM35).unwrap();
        assert_eq!(sensor.read_centi_celsius(), Err(SensorError::Bus));
    }
}
