//! Colour and temperature algorithms.
//!
//! # Components
//!
//! - [`color`]: HSL/HSV conversions, the glow ramp and the non-darkening average
//! - [`temperature`]: Kelvin estimation and blackbody colours
//! - [`palette`]: classification to [`Palette`](crate::core::domain::Palette)
//! - [`luminosity`]: luminosity class to numeric rank
//!
//! # Example
//!
//! ```
//! use starfield_spectra::algorithms::star_palette;
//!
//! let palette = star_palette("B1Iab+B3V");
//! assert!(palette.glow.is_some());
//! assert_eq!(palette.multi_star.len(), 1);
//! ```

pub mod color;
pub mod luminosity;
pub mod palette;
pub mod temperature;

pub use color::{average_colors, cartoon_color, glow_at, Hsl, Hsv};
pub use luminosity::{classification_luminosity_rank, luminosity_rank};
pub use palette::{star_palette, ColorSynthesizer};
pub use temperature::{
    effective_temperature_to_luminosity, estimate_temperature,
    luminosity_to_effective_temperature, TemperatureEstimator,
};
