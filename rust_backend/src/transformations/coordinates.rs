//! Right ascension / declination conversions and absolute magnitude.

use qtty::angular::{Degree, Degrees, HourAngles, Radian, Radians};
use qtty::length::Parsecs;

/// Right ascension in hours, minutes and seconds to degrees.
pub fn ra_to_degrees(hours: f64, minutes: f64, seconds: f64) -> Degrees {
    HourAngles::new(hours + minutes / 60.0 + seconds / 3600.0).to::<Degree>()
}

/// Declination in degrees, arcminutes and arcseconds to decimal degrees.
///
/// The sign is taken from the degrees component alone, so `-0° 30′` is
/// `-0.5`. Signs on minutes and seconds are ignored.
pub fn dec_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> Degrees {
    let sign = if degrees.is_sign_negative() { -1.0 } else { 1.0 };
    Degrees::new(sign * (degrees.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0))
}

pub fn ra_to_radians(hours: f64, minutes: f64, seconds: f64) -> Radians {
    ra_to_degrees(hours, minutes, seconds).to::<Radian>()
}

pub fn dec_to_radians(degrees: f64, minutes: f64, seconds: f64) -> Radians {
    dec_to_degrees(degrees, minutes, seconds).to::<Radian>()
}

/// Absolute magnitude from apparent magnitude and distance.
pub fn absolute_magnitude(apparent: f64, distance: Parsecs) -> f64 {
    apparent - 5.0 * (distance.value() / 10.0).log10()
}
