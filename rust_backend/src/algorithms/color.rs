//! Colour-space conversions and the perceptual hue ramp.
//!
//! Conversions follow the conventions of common web colour libraries: hue is
//! in degrees and may be `NaN` for achromatic colours, saturation and
//! lightness/value are in `[0, 1]`, and channels are rounded and clamped when
//! converting back to 8-bit RGB.

use crate::core::domain::Rgb;

/// Stops of the glow ramp, from the hottest to the coolest end of the scale.
const GLOW_STOPS: [Rgb; 6] = [
    Rgb(0, 0, 255),     // blue
    Rgb(255, 255, 255), // white
    Rgb(255, 255, 0),   // yellow
    Rgb(255, 165, 0),   // orange
    Rgb(255, 0, 0),     // red
    Rgb(128, 0, 128),   // purple
];

/// Lightness multiplier for one step of [`Hsl::brighter`].
const BRIGHTER: f64 = 1.0 / 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = unit_channels(rgb);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            // Greys have no hue; pure black and white have no saturation either.
            let s = if l > 0.0 && l < 1.0 { 0.0 } else { f64::NAN };
            return Self { h: f64::NAN, s, l };
        }

        let h = hue_degrees(r, g, b, max, delta);
        let s = delta / if l < 0.5 { max + min } else { 2.0 - max - min };
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = if self.h.is_nan() {
            f64::NAN
        } else {
            self.h.rem_euclid(360.0)
        };
        let s = if h.is_nan() || self.s.is_nan() {
            0.0
        } else {
            self.s
        };
        let l = self.l;
        let spread = if l < 0.5 { l } else { 1.0 - l };
        let m2 = l + spread * s;
        let m1 = 2.0 * l - m2;

        Rgb(
            to_channel(hsl_component(if h >= 240.0 { h - 240.0 } else { h + 120.0 }, m1, m2)),
            to_channel(hsl_component(h, m1, m2)),
            to_channel(hsl_component(if h < 120.0 { h + 240.0 } else { h - 120.0 }, m1, m2)),
        )
    }

    /// Scales lightness by `(1 / 0.7)^k`.
    pub fn brighter(self, k: f64) -> Self {
        Self {
            l: self.l * BRIGHTER.powf(k),
            ..self
        }
    }

    /// Interpolates towards `other`, taking the shortest way round the hue
    /// circle. A `NaN` component takes the other colour's value.
    pub fn interpolate(self, other: Hsl, t: f64) -> Self {
        Self {
            h: interpolate_hue(self.h, other.h, t),
            s: interpolate_component(self.s, other.s, t),
            l: interpolate_component(self.l, other.l, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = unit_channels(rgb);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            f64::NAN
        } else {
            hue_degrees(r, g, b, max, delta)
        };
        Self {
            h,
            s: delta / max,
            v: max,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = if self.h.is_nan() {
            0.0
        } else {
            self.h.rem_euclid(360.0)
        };
        let s = if self.h.is_nan() || self.s.is_nan() {
            0.0
        } else {
            self.s
        };
        let c = self.v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Rgb(
            to_channel((r + m) * 255.0),
            to_channel((g + m) * 255.0),
            to_channel((b + m) * 255.0),
        )
    }
}

fn unit_channels(rgb: Rgb) -> (f64, f64, f64) {
    (
        rgb.0 as f64 / 255.0,
        rgb.1 as f64 / 255.0,
        rgb.2 as f64 / 255.0,
    )
}

fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sextant = if r == max {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if g == max {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    sextant * 60.0
}

fn hsl_component(h: f64, m1: f64, m2: f64) -> f64 {
    let unit = if h < 60.0 {
        m1 + (m2 - m1) * h / 60.0
    } else if h < 180.0 {
        m2
    } else if h < 240.0 {
        m1 + (m2 - m1) * (240.0 - h) / 60.0
    } else {
        m1
    };
    unit * 255.0
}

fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 255.0) as u8
    }
}

fn interpolate_hue(a: f64, b: f64, t: f64) -> f64 {
    let delta = b - a;
    if delta.is_nan() || delta == 0.0 {
        return if a.is_nan() { b } else { a };
    }
    let delta = if delta.abs() > 180.0 {
        delta - 360.0 * (delta / 360.0).round()
    } else {
        delta
    };
    a + delta * t
}

fn interpolate_component(a: f64, b: f64, t: f64) -> f64 {
    let delta = b - a;
    if delta.is_nan() || delta == 0.0 {
        return if a.is_nan() { b } else { a };
    }
    a + delta * t
}

/// Glow colour at position `t` along the blue, white, yellow, orange, red,
/// purple ramp. `t` is clamped to `[0, 1]`.
pub fn glow_at(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = GLOW_STOPS.len() - 1;
    let scaled = t * segments as f64;
    let index = (scaled.floor() as usize).min(segments - 1);

    let from = Hsl::from_rgb(GLOW_STOPS[index]);
    let to = Hsl::from_rgb(GLOW_STOPS[index + 1]);
    from.interpolate(to, scaled - index as f64).to_rgb()
}

/// Brightened close-up variant of a glow colour.
pub fn cartoon_color(glow: Rgb, brightness: f64) -> Rgb {
    Hsl::from_rgb(glow).brighter(brightness).to_rgb()
}

/// Averages two colours without dimming: the RGB midpoint takes the larger
/// HSV value of the two inputs. The midpoint is rounded to 8-bit channels
/// before its hue and saturation are taken.
pub fn average_colors(a: Rgb, b: Rgb) -> Rgb {
    let midpoint = |x: u8, y: u8| ((x as f64 + y as f64) / 2.0).round() as u8;
    let mixed = Rgb(midpoint(a.0, b.0), midpoint(a.1, b.1), midpoint(a.2, b.2));

    let mut hsv = Hsv::from_rgb(mixed);
    hsv.v = a.max_channel().max(b.max_channel()) as f64 / 255.0;
    hsv.to_rgb()
}
