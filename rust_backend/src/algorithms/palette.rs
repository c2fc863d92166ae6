//! Palette synthesis.
//!
//! A classification is reduced to a single position on the colour scale
//! (0 = hottest, 1 = coolest). That position drives the glow ramp, the
//! cartoon colour and, through the temperature estimator, the blackbody
//! colour. Ranges and multiple systems are folded in with the non-darkening
//! colour average.

use crate::algorithms::color::{average_colors, cartoon_color, glow_at};
use crate::algorithms::temperature::TemperatureEstimator;
use crate::config::PaletteSettings;
use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::domain::{Palette, Rgb, StellarClassification};
use crate::core::tables::KnowledgeTables;
use crate::parsing::SpectralParser;

/// Highest subclass on the usual `0..=9` scale.
const SUBCLASS_LIMIT: f64 = 9.0;

/// Colours derived from a single classification node, ignoring its range
/// partner and siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NodeColors {
    glow: Rgb,
    color: Rgb,
    blackbody: Rgb,
}

/// Maps classifications to palettes.
#[derive(Debug, Clone)]
pub struct ColorSynthesizer<'t> {
    tables: &'t KnowledgeTables,
    estimator: TemperatureEstimator<'t>,
    settings: PaletteSettings,
}

impl ColorSynthesizer<'static> {
    pub fn new() -> Self {
        Self::with_settings(PaletteSettings::default())
    }

    pub fn with_settings(settings: PaletteSettings) -> Self {
        Self::with_tables(KnowledgeTables::standard(), settings)
    }
}

impl Default for ColorSynthesizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> ColorSynthesizer<'t> {
    pub fn with_tables(tables: &'t KnowledgeTables, settings: PaletteSettings) -> Self {
        Self {
            tables,
            estimator: TemperatureEstimator::with_tables(tables),
            settings,
        }
    }

    pub fn settings(&self) -> &PaletteSettings {
        &self.settings
    }

    /// Builds the palette for a parsed classification, logging diagnostics.
    pub fn synthesize(&self, star: &StellarClassification) -> Palette {
        self.synthesize_with_diagnostics(star, &mut Diagnostics::new())
    }

    pub fn synthesize_with_diagnostics(
        &self,
        star: &StellarClassification,
        diagnostics: &mut Diagnostics,
    ) -> Palette {
        self.node_palette(star, false, diagnostics)
    }

    /// Position of `star` on the colour scale, in `[0, 1]`.
    ///
    /// `None` when no spectral class could be resolved.
    pub fn position(
        &self,
        star: &StellarClassification,
        diagnostics: &mut Diagnostics,
    ) -> Option<f64> {
        let class = self.class_average(&star.spectral_class, diagnostics)?;
        let subclass = self.subclass_value(star, diagnostics);
        let scale = self.tables.class_scale_length() as f64;
        Some(((class + subclass / SUBCLASS_LIMIT) / scale).clamp(0.0, 1.0))
    }

    /// Estimated temperature of `star` in Kelvin.
    pub fn temperature_kelvin(
        &self,
        star: &StellarClassification,
        diagnostics: &mut Diagnostics,
    ) -> Option<f64> {
        let position = self.position(star, diagnostics)?;
        Some(
            self.estimator
                .estimate_for_class(&star.spectral_class, position),
        )
    }

    fn node_palette(
        &self,
        star: &StellarClassification,
        nested: bool,
        diagnostics: &mut Diagnostics,
    ) -> Palette {
        let mut palette = Palette::default();

        if star.spectral_class.is_empty() {
            let mut input = star.structured_characters();
            input.push_str(&star.peculiarities);
            diagnostics.push(Diagnostic::UnresolvedClassification { input });
        } else if let Some(colors) = self.node_colors(star, diagnostics) {
            palette.glow = Some(colors.glow);
            palette.color = Some(colors.color);
            palette.blackbody_color = Some(colors.blackbody);
        }

        palette.ranged_glow = match (palette.glow, star.range_partner()) {
            (Some(glow), Some(partner)) => match self.node_colors(partner, diagnostics) {
                Some(colors) => Some(average_colors(glow, colors.glow)),
                None => Some(glow),
            },
            (glow, _) => glow,
        };

        palette.multi_star = star
            .siblings
            .iter()
            .map(|sibling| self.node_palette(sibling, true, diagnostics))
            .collect();

        if !nested && !palette.multi_star.is_empty() {
            palette.averaged_multi = palette
                .multi_star
                .iter()
                .fold(palette.effective_glow(), |running, sibling| {
                    match (running, sibling.effective_glow()) {
                        (Some(a), Some(b)) => Some(average_colors(a, b)),
                        (a, b) => a.or(b),
                    }
                });
        }

        if palette.ranged_glow == palette.glow {
            palette.ranged_glow = None;
        }
        if palette.averaged_multi == palette.glow {
            palette.averaged_multi = None;
        }
        palette
    }

    fn node_colors(
        &self,
        star: &StellarClassification,
        diagnostics: &mut Diagnostics,
    ) -> Option<NodeColors> {
        if star.spectral_class.is_empty() {
            return None;
        }
        let position = self.position(star, diagnostics)?;
        let glow = glow_at(position);
        let kelvin = self
            .estimator
            .estimate_for_class(&star.spectral_class, position);

        Some(NodeColors {
            glow,
            color: cartoon_color(glow, self.settings.cartoon_brightness),
            blackbody: self.estimator.blackbody_rgb(kelvin),
        })
    }

    /// Average scale index of the class letters in `class`. `B/A` and `B-A`
    /// average both classes.
    fn class_average(&self, class: &str, diagnostics: &mut Diagnostics) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;

        for part in split_range(class).filter(|part| !part.is_empty()) {
            match self.class_index(part) {
                Some(index) => {
                    sum += index;
                    count += 1;
                }
                None => diagnostics.push(Diagnostic::UnknownSpectralClass {
                    token: part.to_string(),
                }),
            }
        }

        (count > 0).then(|| sum / count as f64)
    }

    fn class_index(&self, token: &str) -> Option<f64> {
        if let Some(index) = self.tables.class_scale_index(token) {
            return Some(index as f64);
        }
        // Wolf-Rayet subtypes (WN6h, WC7, ...) all sit with W.
        if token.starts_with('W') {
            return self.tables.class_scale_index("W").map(f64::from);
        }

        let indices: Vec<f64> = token
            .chars()
            .filter_map(|c| self.tables.class_scale_index(&c.to_string()))
            .map(f64::from)
            .collect();
        if indices.is_empty() {
            None
        } else {
            Some(indices.iter().sum::<f64>() / indices.len() as f64)
        }
    }

    /// Numeric subclass, averaging ranges such as `2-4`. S-type stars use
    /// their first index.
    fn subclass_value(&self, star: &StellarClassification, diagnostics: &mut Diagnostics) -> f64 {
        let s_type_index = match star.x.as_deref() {
            Some(x) if star.is_s_type() => {
                if x.trim().parse::<f64>().is_ok() {
                    Some(x)
                } else {
                    diagnostics.push(Diagnostic::NonNumericSubclass {
                        fragment: x.to_string(),
                    });
                    None
                }
            }
            _ => None,
        };
        let raw = s_type_index.unwrap_or(&star.spectral_subclass);

        let mut sum = 0.0;
        let mut count = 0usize;
        for part in split_range(raw).filter(|part| !part.is_empty()) {
            match part.trim().parse::<f64>() {
                Ok(value) => {
                    sum += value;
                    count += 1;
                }
                Err(_) => diagnostics.push(Diagnostic::NonNumericSubclass {
                    fragment: part.to_string(),
                }),
            }
        }

        if count == 0 {
            self.settings.unspecified_subclass
        } else {
            sum / count as f64
        }
    }
}

/// Splits on `/` if present, otherwise on `-`.
fn split_range(value: &str) -> std::str::Split<'_, char> {
    let separator = if value.contains('/') { '/' } else { '-' };
    value.split(separator)
}

/// Parses `spectral_type` and builds its palette with default settings.
pub fn star_palette(spectral_type: &str) -> Palette {
    let star = SpectralParser::new().parse(spectral_type);
    ColorSynthesizer::new().synthesize(&star)
}
