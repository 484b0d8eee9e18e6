//! Temperature sensor trait

/// Errors that can occur when acquiring a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Requested ADC channel outside the converter's input range
    InvalidChannel,
    /// Sensor model with a zero reference voltage or full-scale code
    InvalidModel,
    /// The bus exchange with the converter failed
    Bus,
}

/// Trait for temperature sensors
///
/// Implementations own their full acquisition path (converter, bus,
/// calibration) and report calibrated temperatures.
pub trait TemperatureSensor {
    /// Read the current temperature in centi-degrees Celsius
    ///
    /// 25.16°C is returned as 2516. Takes `&mut self` because each read is
    /// a bus transaction.
    fn read_centi_celsius(&mut self) -> Result<i32, SensorError>;

    /// Read the current temperature in whole degrees Celsius
    fn read_celsius(&mut self) -> Result<i32, SensorError> {
        self.read_centi_celsius().map(|t| t / 100)
    }
}
