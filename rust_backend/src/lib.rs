//! Stellar spectral classification parsing and display colours.
//!
//! Free-form MK spectral types (`O9.5V`, `A5-F1III/IVm`, `B1Iab+B3V`,
//! `WN6h`, `S7/4`) are parsed into a [`StellarClassification`] tree, which in
//! turn drives a deterministic [`Palette`] and temperature estimate.
//!
//! ```
//! use starfield_spectra::{parse_spectral_type, star_palette};
//!
//! let star = parse_spectral_type("B1Iab+B3V");
//! assert_eq!(star.siblings[0].luminosity_class, "V");
//!
//! let palette = star_palette("B1Iab+B3V");
//! assert!(palette.averaged_multi.is_some());
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod preprocessing;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

pub use crate::algorithms::{star_palette, ColorSynthesizer, TemperatureEstimator};
pub use crate::config::SpectraConfig;
pub use crate::core::{Diagnostic, Diagnostics, Palette, Rgb, StellarClassification};
pub use crate::error::{SpectraError, SpectraResult};
pub use crate::parsing::{parse_spectral_type, SpectralParser};
pub use crate::preprocessing::{AppearancePipeline, StarAppearance};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Starfield spectra - MK classification parsing and star colours
#[cfg(feature = "python")]
#[pymodule]
fn starfield_spectra(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::parse_spectral_type, m)?)?;
    m.add_function(wrap_pyfunction!(python::star_palette, m)?)?;
    m.add_function(wrap_pyfunction!(python::estimate_temperature, m)?)?;
    m.add_function(wrap_pyfunction!(python::describe_star, m)?)?;
    m.add_function(wrap_pyfunction!(python::describe_stars_json, m)?)?;

    Ok(())
}
