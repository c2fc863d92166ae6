//! Unit conversions applied to catalog values.
//!
//! # Example
//!
//! ```
//! use starfield_spectra::transformations::{dec_to_degrees, ra_to_degrees};
//!
//! assert_eq!(ra_to_degrees(6.0, 0.0, 0.0).value(), 90.0);
//! assert_eq!(dec_to_degrees(-0.0, 30.0, 0.0).value(), -0.5);
//! ```

pub mod coordinates;

pub use coordinates::{
    absolute_magnitude, dec_to_degrees, dec_to_radians, ra_to_degrees, ra_to_radians,
};
