//! Parsers for stellar spectral classification strings.
//!
//! # Example
//!
//! ```
//! use starfield_spectra::parsing::parse_spectral_type;
//!
//! let star = parse_spectral_type("A5-F1III");
//! assert_eq!(star.luminosity_class, "III");
//! assert_eq!(star.range_to().unwrap().spectral_class, "F");
//! ```

pub mod spectral_parser;


pub use spectral_parser::{parse_spectral_type, SpectralParser};
