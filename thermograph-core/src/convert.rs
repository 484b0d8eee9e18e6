//! Sample-to-temperature conversion
//!
//! Pure fixed-point math mapping a raw ADC code to a temperature under a
//! linear sensor response model. Temperatures are centi-degrees Celsius
//! (2516 = 25.16°C) to keep the math integer-only.

/// Linear sensor response model
///
/// Maps a raw ADC code to a temperature:
/// `voltage = sample * vref / full_scale`,
/// `temperature = voltage * scale + offset`.
///
/// Calibrations are not interchangeable; a deployment picks exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorModel {
    /// ADC reference voltage in millivolts
    pub vref_mv: u32,
    /// Full-scale ADC code (1023 for a 10-bit converter)
    pub full_scale: u16,
    /// Sensor slope in °C per volt
    pub scale_c_per_v: i32,
    /// Temperature at 0 V, in centi-degrees
    pub offset_centi_c: i32,
}

impl SensorModel {
    /// LM35 against a 3.3 V reference: 10 mV/°C, 0 V reads 0°C
    pub const LM35: Self = Self {
        vref_mv: 3300,
        full_scale: 1023,
        scale_c_per_v: 100,
        offset_centi_c: 0,
    };

    /// -50..+280°C span over the full 0..3.3 V range
    pub const WIDE_RANGE: Self = Self {
        vref_mv: 3300,
        full_scale: 1023,
        scale_c_per_v: 100,
        offset_centi_c: -5000,
    };

    /// Check the model is usable (non-zero reference and full-scale code)
    pub fn is_valid(&self) -> bool {
        self.vref_mv > 0 && self.full_scale > 0
    }
}

/// Convert a raw sample to centi-degrees Celsius
///
/// Total over the full 10-bit sample domain; the caller guarantees a valid
/// model (see [`SensorModel::is_valid`]). Ties round away from zero.
pub fn convert(sample: u16, model: &SensorModel) -> i32 {
    convert_with_decimals(sample, model, 2)
}

/// Convert and round to `decimals` decimal places (0, 1 or 2)
///
/// The result stays in centi-degrees: with `decimals = 1` it is always a
/// multiple of 10, with `decimals = 0` a multiple of 100. Values above 2
/// are clamped to 2. Ties round away from zero.
pub fn convert_with_decimals(sample: u16, model: &SensorModel, decimals: u8) -> i32 {
    // Exact value in centi-degrees is
    //   (sample * vref_mv * scale) / (10 * full_scale) + offset
    // Rounding happens at the requested digit, with the offset folded in
    // before the division so it participates in the rounding.
    let denom_centi = 10 * model.full_scale as i64;
    let numerator = sample as i64 * model.vref_mv as i64 * model.scale_c_per_v as i64
        + model.offset_centi_c as i64 * denom_centi;

    let unit: i64 = match decimals {
        0 => 100,
        1 => 10,
        _ => 1,
    };

    (div_round_half_away(numerator, denom_centi * unit) * unit) as i32
}

/// Integer division rounding halves away from zero
///
/// The divisor must be positive.
fn div_round_half_away(numerator: i64, divisor: i64) -> i64 {
    if numerator >= 0 {
        (numerator + divisor / 2) / divisor
    } else {
        -((-numerator + divisor / 2) / divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_sample_maps_to_offset() {
        assert_eq!(convert(0, &SensorModel::LM35), 0);
        assert_eq!(convert(0, &SensorModel::WIDE_RANGE), -5000);
    }

    #[test]
    fn test_full_scale_sample() {
        // 3.3 V * 100 °C/V = 330.00°C
        assert_eq!(convert(1023, &SensorModel::LM35), 33_000);

        // Wide-range calibration tops out at exactly +280°C
        assert_eq!(convert(1023, &SensorModel::WIDE_RANGE), 28_000);
    }

    #[test]
    fn test_worked_example() {
        // 78 * 3.3 / 1023 * 100 = 25.1613°C
        assert_eq!(convert(78, &SensorModel::LM35), 2516);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        // sample 1 lands on exactly +0.005°C (0.5 centi-degrees)
        let model = SensorModel {
            vref_mv: 1023,
            full_scale: 1023,
            scale_c_per_v: 5,
            offset_centi_c: 0,
        };
        assert_eq!(convert(1, &model), 1);

        // Mirror with a negative slope: exactly -0.005°C
        let inverted = SensorModel {
            scale_c_per_v: -5,
            ..model
        };
        assert_eq!(convert(1, &inverted), -1);
    }

    #[test]
    fn test_rounding_to_fewer_decimals() {
        // 25.1613°C
        assert_eq!(convert_with_decimals(78, &SensorModel::LM35, 1), 2520);
        assert_eq!(convert_with_decimals(78, &SensorModel::LM35, 0), 2500);
    }

    #[test]
    fn test_tie_at_one_decimal() {
        // sample 150 is exactly 0.15°C: halfway between 0.1 and 0.2
        let model = SensorModel {
            vref_mv: 1000,
            full_scale: 1000,
            scale_c_per_v: 1,
            offset_centi_c: 0,
        };
        assert_eq!(convert_with_decimals(150, &model, 1), 20);
    }

    #[test]
    fn test_model_validation() {
        assert!(SensorModel::LM35.is_valid());
        assert!(SensorModel::WIDE_RANGE.is_valid());

        let no_reference = SensorModel {
            vref_mv: 0,
            ..SensorModel::LM35
        };
        assert!(!no_reference.is_valid());

        let no_full_scale = SensorModel {
            full_scale: 0,
            ..SensorModel::LM35
        };
        assert!(!no_full_scale.is_valid());
    }

    proptest! {
        #[test]
        fn convert_is_monotonic(a in 0u16..=1023, b in 0u16..=1023) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(convert(lo, &SensorModel::LM35) <= convert(hi, &SensorModel::LM35));
        }

        #[test]
        fn convert_stays_in_model_range(sample in 0u16..=1023) {
            let t = convert(sample, &SensorModel::WIDE_RANGE);
            prop_assert!((-5000..=28_000).contains(&t));
        }
    }
}
