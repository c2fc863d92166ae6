use pyo3::prelude::*;

use crate::algorithms::palette::ColorSynthesizer;
use crate::algorithms::temperature::TemperatureEstimator;
use crate::parsing::SpectralParser;
use crate::preprocessing::to_json;

/// Parse an MK spectral type
///
/// Args:
///     spectral_type: Classification string, e.g. "A5-F1III/IVm"
///
/// Returns:
///     str: JSON object with spectralClass, spectralSubclass,
///     luminosityClass, rangeTo/rangeOr, siblings and peculiarities
#[pyfunction]
pub fn parse_spectral_type(spectral_type: &str) -> PyResult<String> {
    let star = SpectralParser::new().parse(spectral_type);
    Ok(to_json(&star, false)?)
}

/// Display colours for a spectral type
///
/// Args:
///     spectral_type: Classification string, e.g. "B1Iab+B3V"
///
/// Returns:
///     str: JSON object with glow, color, blackbodyColor and, where they
///     apply, rangedGlow, multiStar and averagedMulti
#[pyfunction]
pub fn star_palette(spectral_type: &str) -> PyResult<String> {
    let star = SpectralParser::new().parse(spectral_type);
    let palette = ColorSynthesizer::new().synthesize(&star);
    Ok(to_json(&palette, false)?)
}

/// Estimate a temperature from a colour-scale position
///
/// Args:
///     position: 0.0 (hottest) to 1.0 (coolest); values outside are clamped
///
/// Returns:
///     float: Temperature in Kelvin
#[pyfunction]
pub fn estimate_temperature(position: f64) -> f64 {
    TemperatureEstimator::new().estimate(position)
}
