use serde::{Deserialize, Serialize};

use crate::algorithms::luminosity::classification_luminosity_rank;
use crate::algorithms::palette::ColorSynthesizer;
use crate::config::{PaletteSettings, SpectraConfig};
use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::domain::{Palette, StellarClassification};
use crate::error::{SpectraError, SpectraResult};
use crate::parsing::SpectralParser;

/// One star to describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarInput {
    #[serde(default)]
    pub name: Option<String>,
    pub spectral_type: String,
}

impl StarInput {
    pub fn new(spectral_type: impl Into<String>) -> Self {
        Self {
            name: None,
            spectral_type: spectral_type.into(),
        }
    }

    pub fn named(name: impl Into<String>, spectral_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            spectral_type: spectral_type.into(),
        }
    }
}

/// Everything derived from one star's spectral type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarAppearance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub spectral_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<StellarClassification>,
    pub palette: Palette,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_kelvin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luminosity_rank: Option<f64>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of describing a batch of stars
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceBatch {
    pub appearances: Vec<StarAppearance>,
    pub total_stars: usize,
    pub resolved_stars: usize,
    pub stars_with_diagnostics: usize,
}

/// Configuration for the appearance pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceConfig {
    pub palette: PaletteSettings,
    pub include_classification: bool,
    pub include_temperature: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            palette: PaletteSettings::default(),
            include_classification: true,
            include_temperature: true,
        }
    }
}

impl From<&SpectraConfig> for AppearanceConfig {
    fn from(config: &SpectraConfig) -> Self {
        Self {
            palette: config.palette.clone(),
            include_classification: config.output.include_classification,
            include_temperature: config.output.include_temperature,
        }
    }
}

/// Parse, colour and rank stars in one pass
pub struct AppearancePipeline {
    config: AppearanceConfig,
    parser: SpectralParser<'static>,
    synthesizer: ColorSynthesizer<'static>,
}

impl AppearancePipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self::with_config(AppearanceConfig::default())
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: AppearanceConfig) -> Self {
        Self {
            parser: SpectralParser::new(),
            synthesizer: ColorSynthesizer::with_settings(config.palette.clone()),
            config,
        }
    }

    pub fn config(&self) -> &AppearanceConfig {
        &self.config
    }

    /// Describe a single star.
    ///
    /// Never fails: problems with the spectral type are reported in the
    /// returned `diagnostics` and logged.
    pub fn describe(&self, name: Option<&str>, spectral_type: &str) -> StarAppearance {
        let spectral_type = spectral_type.trim();
        let mut diagnostics = match name {
            Some(name) => Diagnostics::for_star(name),
            None => Diagnostics::new(),
        };

        let star = self
            .parser
            .parse_with_diagnostics(spectral_type, &mut diagnostics);
        let palette = self
            .synthesizer
            .synthesize_with_diagnostics(&star, &mut diagnostics);
        let luminosity_rank = classification_luminosity_rank(&star, &mut diagnostics);

        // Anything wrong with the class was reported while building the palette.
        let temperature_kelvin = if self.config.include_temperature {
            self.synthesizer
                .temperature_kelvin(&star, &mut Diagnostics::quiet())
        } else {
            None
        };

        StarAppearance {
            name: name.map(str::to_string),
            spectral_type: spectral_type.to_string(),
            classification: self.config.include_classification.then_some(star),
            palette,
            temperature_kelvin,
            luminosity_rank,
            diagnostics: diagnostics.into_entries(),
        }
    }

    /// Describe many stars. A star with diagnostics never stops the batch.
    pub fn describe_batch(&self, stars: &[StarInput]) -> AppearanceBatch {
        let appearances: Vec<StarAppearance> = stars
            .iter()
            .map(|star| self.describe(star.name.as_deref(), &star.spectral_type))
            .collect();

        let resolved_stars = appearances
            .iter()
            .filter(|appearance| appearance.palette.glow.is_some())
            .count();
        let stars_with_diagnostics = appearances
            .iter()
            .filter(|appearance| !appearance.diagnostics.is_empty())
            .count();

        log::info!(
            "Described {} stars ({} resolved, {} with diagnostics)",
            appearances.len(),
            resolved_stars,
            stars_with_diagnostics
        );

        AppearanceBatch {
            total_stars: appearances.len(),
            resolved_stars,
            stars_with_diagnostics,
            appearances,
        }
    }

    /// Describe stars given as a JSON array of `{ "name"?, "spectralType" }`.
    pub fn describe_json_str(&self, json_str: &str) -> SpectraResult<AppearanceBatch> {
        let stars: Vec<StarInput> = serde_json::from_str(json_str).map_err(|e| {
            SpectraError::InputError(format!("Failed to parse star list: {}", e))
        })?;
        Ok(self.describe_batch(&stars))
    }
}

impl Default for AppearancePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialise any result of this crate to JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> SpectraResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Convenience function to describe one star with default settings
pub fn describe_star(name: Option<&str>, spectral_type: &str) -> StarAppearance {
    AppearancePipeline::new().describe(name, spectral_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_binary() {
        let appearance = describe_star(Some("Alnitak"), "O9.5Iab+B1IV");

        assert_eq!(appearance.name.as_deref(), Some("Alnitak"));
        assert_eq!(appearance.spectral_type, "O9.5Iab+B1IV");
        let classification = appearance.classification.as_ref().unwrap();
        assert_eq!(classification.siblings.len(), 1);
        assert_eq!(appearance.palette.multi_star.len(), 1);
        assert!(appearance.temperature_kelvin.is_some());
        assert_eq!(appearance.luminosity_rank, Some(2.0));
        assert!(appearance.diagnostics.is_empty());
    }

    #[test]
    fn test_describe_trims_input() {
        let appearance = describe_star(None, "  G2V \n");
        assert_eq!(appearance.spectral_type, "G2V");
        assert_eq!(appearance.luminosity_rank, Some(7.0));
    }

    #[test]
    fn test_config_switches_fields_off() {
        let pipeline = AppearancePipeline::with_config(AppearanceConfig {
            include_classification: false,
            include_temperature: false,
            ..Default::default()
        });
        let appearance = pipeline.describe(None, "K1III");

        assert!(appearance.classification.is_none());
        assert!(appearance.temperature_kelvin.is_none());
        assert!(appearance.palette.glow.is_some());
    }

    #[test]
    fn test_batch_continues_past_bad_stars() {
        let stars = vec![
            StarInput::named("Sun", "G2V"),
            StarInput::named("Mystery", "???"),
            StarInput::new("M1Q"),
        ];

        let batch = AppearancePipeline::new().describe_batch(&stars);
        assert_eq!(batch.total_stars, 3);
        assert_eq!(batch.resolved_stars, 2);
        assert_eq!(batch.stars_with_diagnostics, 2);
        assert!(batch.appearances[0].diagnostics.is_empty());
        assert!(matches!(
            batch.appearances[1].diagnostics[0],
            Diagnostic::UnresolvedClassification { .. }
        ));
    }

    #[test]
    fn test_describe_reports_bad_s_type_index_once() {
        let appearance = describe_star(None, "S4.5e/3");

        assert_eq!(
            appearance.diagnostics,
            vec![Diagnostic::NonNumericSubclass {
                fragment: "4.5e".to_string()
            }]
        );
        assert!(appearance.palette.glow.is_some());
    }

    #[test]
    fn test_describe_json_str() {
        let json = r#"[
            { "name": "Vega", "spectralType": "A0Va" },
            { "spectralType": "S7/4" }
        ]"#;

        let batch = AppearancePipeline::new().describe_json_str(json).unwrap();
        assert_eq!(batch.total_stars, 2);
        assert_eq!(batch.appearances[0].name.as_deref(), Some("Vega"));
        let s_type = batch.appearances[1].classification.as_ref().unwrap();
        assert_eq!(s_type.x.as_deref(), Some("7"));
    }

    #[test]
    fn test_describe_json_str_rejects_bad_input() {
        let result = AppearancePipeline::new().describe_json_str("{ not json");
        assert!(matches!(result, Err(SpectraError::InputError(_))));
    }

    #[test]
    fn test_appearance_serialization() {
        let appearance = describe_star(None, "A5-F1III");
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&appearance, false).unwrap()).unwrap();

        assert!(json.get("name").is_none());
        assert_eq!(json["spectralType"], "A5-F1III");
        assert_eq!(json["classification"]["rangeTo"]["spectralClass"], "F");
        assert!(json["palette"]["glow"].as_str().unwrap().starts_with('#'));
        assert!(json["palette"]["rangedGlow"].is_string());
        assert_eq!(json["luminosityRank"], 5.0);
        assert_eq!(json["diagnostics"], serde_json::json!([]));
    }
}
