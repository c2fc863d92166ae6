//! Python bindings.
//!
//! Built only with the `python` feature. Results cross the boundary as JSON
//! strings so Python callers can `json.loads` them without extra classes.
//!
//! # Modules
//!
//! - [`classification`]: parsing, palettes and temperature estimates
//! - [`appearance`]: the per-star appearance pipeline
//!
//! # Python API
//!
//! ```text
//! >>> import json, starfield_spectra
//! >>> json.loads(starfield_spectra.parse_spectral_type("B1Iab+B3V"))["luminosityClass"]
//! 'Iab'
//! ```

pub mod appearance;
pub mod classification;

pub use appearance::*;
pub use classification::*;

use pyo3::exceptions::PyRuntimeError;
use pyo3::PyErr;

use crate::error::SpectraError;

impl From<SpectraError> for PyErr {
    fn from(err: SpectraError) -> Self {
        PyRuntimeError::new_err(err.to_string())
    }
}
