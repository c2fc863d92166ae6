//! Temperature estimation.
//!
//! A star's position on the colour scale (0 = hottest end, 1 = coolest end)
//! is mapped onto the table of per-class Kelvin ranges. Wolf-Rayet subtypes
//! have fixed temperatures and bypass the table.

use crate::core::domain::Rgb;
use crate::core::tables::KnowledgeTables;

/// Stefan-Boltzmann constant in W m^-2 K^-4.
const STEFAN_BOLTZMANN: f64 = 5.67e-8;
/// Nominal solar luminosity in watts.
const SOLAR_LUMINOSITY: f64 = 3.828e26;
/// Nominal solar radius in metres.
const SOLAR_RADIUS: f64 = 6.9634e8;

/// Estimates Kelvin temperatures from the knowledge tables.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureEstimator<'t> {
    tables: &'t KnowledgeTables,
}

impl TemperatureEstimator<'static> {
    pub fn new() -> Self {
        Self::with_tables(KnowledgeTables::standard())
    }
}

impl Default for TemperatureEstimator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> TemperatureEstimator<'t> {
    pub fn with_tables(tables: &'t KnowledgeTables) -> Self {
        Self { tables }
    }

    /// Maps a scale position in `[0, 1]` to Kelvin.
    ///
    /// The position is split into `N` equal buckets, one per class range, and
    /// interpolated linearly from the bucket's minimum to its maximum.
    /// Positions outside `[0, 1]` are clamped; exactly `1.0` lands at the top
    /// of the last bucket.
    pub fn estimate(&self, position: f64) -> f64 {
        let ranges = self.tables.kelvin_ranges();
        let Some(last) = ranges.len().checked_sub(1) else {
            return 0.0;
        };

        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        let scaled = position * ranges.len() as f64;
        let index = (scaled.floor() as usize).min(last);
        let fraction = scaled - index as f64;

        let range = ranges[index];
        lerp(range.min, range.max, fraction)
    }

    /// Like [`estimate`](Self::estimate), but Wolf-Rayet class tokens such as
    /// `WN6h` return their fixed temperature.
    pub fn estimate_for_class(&self, class: &str, position: f64) -> f64 {
        self.tables
            .wolf_rayet_kelvin(class)
            .unwrap_or_else(|| self.estimate(position))
    }

    /// Temperature of `subclass` within a single class range: subclass 0 is
    /// the hot end and 9 the cool end.
    pub fn subclass_kelvin(&self, class: &str, subclass: f64) -> Option<f64> {
        if let Some(kelvin) = self.tables.wolf_rayet_kelvin(class) {
            return Some(kelvin);
        }
        let range = self.tables.kelvin_range(class)?;
        let inverse = (subclass / 9.0 - 1.0).abs();
        Some(lerp(range.min, range.max, inverse))
    }

    /// Blackbody colour at `kelvin`, interpolated between curve anchors and
    /// clamped to the ends of the curve.
    pub fn blackbody_rgb(&self, kelvin: f64) -> Rgb {
        let curve = self.tables.blackbody_curve();
        let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
            return Rgb(0, 0, 0);
        };

        if kelvin.is_nan() || kelvin <= first.0 {
            return to_rgb(first.1);
        }
        if kelvin >= last.0 {
            return to_rgb(last.1);
        }

        let upper = curve.partition_point(|(anchor, _)| *anchor <= kelvin);
        let (k0, c0) = curve[upper - 1];
        let (k1, c1) = curve[upper];
        let t = (kelvin - k0) / (k1 - k0);
        let channel = |i: usize| lerp(c0[i] as f64, c1[i] as f64, t).round() as u8;
        Rgb(channel(0), channel(1), channel(2))
    }
}

fn to_rgb(channels: [u8; 3]) -> Rgb {
    Rgb(channels[0], channels[1], channels[2])
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Kelvin estimate for a scale position using the standard tables.
pub fn estimate_temperature(position: f64) -> f64 {
    TemperatureEstimator::new().estimate(position)
}

/// Luminosity in solar units of a one-solar-radius star at `kelvin`.
///
/// This is a rough approximation: real stars are rarely one solar radius.
pub fn effective_temperature_to_luminosity(kelvin: f64) -> f64 {
    4.0 * std::f64::consts::PI * SOLAR_RADIUS.powi(2) * STEFAN_BOLTZMANN * kelvin.powi(4)
        / SOLAR_LUMINOSITY
}

/// Inverse of [`effective_temperature_to_luminosity`].
pub fn luminosity_to_effective_temperature(solar_luminosities: f64) -> f64 {
    let watts = solar_luminosities * SOLAR_LUMINOSITY;
    (watts / (4.0 * std::f64::consts::PI * SOLAR_RADIUS.powi(2) * STEFAN_BOLTZMANN)).powf(0.25)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_estimate_clamps_to_table_ends() {
        let estimator = TemperatureEstimator::new();
        assert_abs_diff_eq!(estimator.estimate(0.0), 30_000.0);
        assert_relative_eq!(estimator.estimate(0.999_999_9), 800.0, max_relative = 1e-4);
        assert_abs_diff_eq!(estimator.estimate(1.0), 800.0);
        assert_abs_diff_eq!(estimator.estimate(1.5), 800.0);
        assert_abs_diff_eq!(estimator.estimate(-0.2), 30_000.0);
    }

    #[test]
    fn test_estimate_interpolates_within_bucket() {
        let estimator = TemperatureEstimator::new();
        // Halfway through the second bucket (B).
        assert_abs_diff_eq!(estimator.estimate(0.15), 20_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_estimate_for_wolf_rayet() {
        let estimator = TemperatureEstimator::new();
        assert_eq!(estimator.estimate_for_class("WC7", 0.5), 71_000.0);
        assert_eq!(estimator.estimate_for_class("G", 0.0), 30_000.0);
    }

    #[test]
    fn test_subclass_kelvin() {
        let estimator = TemperatureEstimator::new();
        assert_abs_diff_eq!(estimator.subclass_kelvin("A", 0.0).unwrap(), 10_000.0);
        assert_abs_diff_eq!(estimator.subclass_kelvin("A", 9.0).unwrap(), 7_500.0);
        assert_eq!(estimator.subclass_kelvin("WN2", 5.0), Some(141_000.0));
        assert_eq!(estimator.subclass_kelvin("Q", 5.0), None);
    }

    #[test]
    fn test_blackbody_rgb() {
        let estimator = TemperatureEstimator::new();
        assert_eq!(estimator.blackbody_rgb(500.0), Rgb(255, 56, 0));
        assert_eq!(estimator.blackbody_rgb(6_500.0), Rgb(255, 249, 253));
        assert_eq!(estimator.blackbody_rgb(100_000.0), Rgb(155, 188, 255));
        // Halfway between the 1000 K and 1500 K anchors.
        assert_eq!(estimator.blackbody_rgb(1_250.0), Rgb(255, 83, 0));
    }

    #[test]
    fn test_stefan_boltzmann_round_trip() {
        let sun = luminosity_to_effective_temperature(1.0);
        assert_relative_eq!(sun, 5_772.0, max_relative = 1e-2);
        assert_relative_eq!(effective_temperature_to_luminosity(sun), 1.0, max_relative = 1e-9);
    }
}
