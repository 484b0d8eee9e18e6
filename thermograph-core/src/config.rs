//! Monitor configuration
//!
//! Fixed at process start; there is no runtime reconfiguration. Pin and bus
//! assignments live in the firmware crate next to the peripheral bring-up.

use crate::convert::SensorModel;

/// Sampling configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// ADC input channel the sensor is wired to (0-7)
    pub channel: u8,
    /// Seconds between samples
    pub sample_period_s: u32,
    /// Sensor calibration in use
    pub model: SensorModel,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            sample_period_s: 60,
            model: SensorModel::LM35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_usable() {
        let config = MonitorConfig::default();
        assert!(config.channel < 8);
        assert!(config.sample_period_s > 0);
        assert!(config.model.is_valid());
    }
}
