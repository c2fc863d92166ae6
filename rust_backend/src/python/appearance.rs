use pyo3::prelude::*;

use crate::preprocessing::{to_json, AppearancePipeline};

/// Describe one star: classification, palette, temperature, luminosity rank
///
/// Args:
///     spectral_type: Classification string
///     name: Optional star name, used to prefix warnings
///
/// Returns:
///     str: JSON object (see StarAppearance)
#[pyfunction]
#[pyo3(signature = (spectral_type, name=None))]
pub fn describe_star(spectral_type: &str, name: Option<&str>) -> PyResult<String> {
    let appearance = AppearancePipeline::new().describe(name, spectral_type);
    Ok(to_json(&appearance, false)?)
}

/// Describe many stars at once
///
/// Args:
///     stars_json: JSON array of {"name"?: str, "spectralType": str}
///
/// Returns:
///     str: JSON object with appearances and batch counts
#[pyfunction]
pub fn describe_stars_json(stars_json: &str) -> PyResult<String> {
    let batch = AppearancePipeline::new().describe_json_str(stars_json)?;
    Ok(to_json(&batch, false)?)
}
