//! Integration tests for the parse → palette → temperature chain.
//!
//! These tests ensure that:
//! 1. Catalog notations parse into the expected classification trees
//! 2. Every input character is accounted for, for any input
//! 3. Palettes never darken when colours are blended and stay pruned
//! 4. Temperature estimates stay inside the range table

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use starfield_spectra::algorithms::{
    average_colors, estimate_temperature, ColorSynthesizer, Hsv, TemperatureEstimator,
};
use starfield_spectra::core::{Diagnostics, Rgb, StellarClassification};
use starfield_spectra::parsing::{parse_spectral_type, SpectralParser};
use starfield_spectra::preprocessing::{AppearancePipeline, StarInput};
use starfield_spectra::star_palette;

// ==================== Helper Functions ====================

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

fn accounted_chars(star: &StellarClassification) -> Vec<char> {
    let mut accounted = star.structured_characters();
    accounted.push_str(&star.peculiarities);
    sorted_chars(&accounted)
}

fn has_both_ranges(star: &StellarClassification) -> bool {
    (star.range_to().is_some() && star.range_or().is_some())
        || star.range_partner().is_some_and(has_both_ranges)
        || star.siblings.iter().any(has_both_ranges)
}

fn quiet_parse(input: &str) -> StellarClassification {
    SpectralParser::new().parse_with_diagnostics(input, &mut Diagnostics::quiet())
}

/// Characters found in catalog spectral types, plus a little noise.
fn spectral_type_strategy() -> impl Strategy<Value = String> {
    "[OBAFGKMLTYSWDNCQZh0-9.IVab+/: ep-]{0,16}"
}

// ==================== Parsing ====================

#[test]
fn test_binary_split() {
    let star = parse_spectral_type("B1Iab+B3V");

    assert_eq!(star.spectral_class, "B");
    assert_eq!(star.spectral_subclass, "1");
    assert_eq!(star.luminosity_class, "Iab");
    assert_eq!(star.siblings.len(), 1);
    assert_eq!(star.siblings[0].spectral_class, "B");
    assert_eq!(star.siblings[0].spectral_subclass, "3");
    assert_eq!(star.siblings[0].luminosity_class, "V");
}

#[test]
fn test_range_with_luminosity_hoist() {
    let star = parse_spectral_type("A5-F1III");

    assert_eq!(star.spectral_class, "A");
    assert_eq!(star.spectral_subclass, "5");
    assert_eq!(star.luminosity_class, "III");

    let partner = star.range_to().expect("rangeTo should be set");
    assert_eq!(partner.spectral_class, "F");
    assert_eq!(partner.spectral_subclass, "1");
    assert_eq!(partner.luminosity_class, "III");
}

#[test]
fn test_s_type_shortcut() {
    let star = parse_spectral_type("S7/4");

    assert_eq!(star.spectral_class, "S");
    assert_eq!(star.x.as_deref(), Some("7"));
    assert_eq!(star.y.as_deref(), Some("4"));
    assert!(star.spectral_subclass.is_empty());
    assert!(star.luminosity_class.is_empty());

    let json = serde_json::to_value(&star).unwrap();
    assert_eq!(json, serde_json::json!({ "spectralClass": "S", "x": "7", "y": "4" }));
}

#[test]
fn test_classification_json_shape() {
    let json = serde_json::to_value(parse_spectral_type("B9/A0V+K2IIIe")).unwrap();

    assert_eq!(json["spectralClass"], "B");
    assert_eq!(json["luminosityClass"], "V");
    assert_eq!(json["rangeOr"]["spectralClass"], "A");
    assert!(json.get("rangeTo").is_none());
    assert_eq!(json["siblings"][0]["luminosityClass"], "III");
    assert_eq!(json["peculiarities"], "e");
}

#[test]
fn test_empty_and_garbage_input_never_fail() {
    for input in ["", " ", "???", "+", "-/-", "IIIV"] {
        let star = quiet_parse(input);
        assert!(star.spectral_class.is_empty(), "{:?}", input);
        assert_eq!(accounted_chars(&star), sorted_chars(input));
    }
}

// ==================== Palette ====================

#[test]
fn test_redundancy_pruning() {
    for input in ["G2V", "M1III", "WN6h", "DA2", "S3/6"] {
        let palette = star_palette(input);

        assert!(palette.glow.is_some(), "{:?}", input);
        assert!(palette.ranged_glow.is_none(), "{:?}", input);
        assert!(palette.averaged_multi.is_none(), "{:?}", input);
        assert!(palette.multi_star.is_empty(), "{:?}", input);
    }
}

#[test]
fn test_multi_star_palette() {
    let palette = star_palette("O9.5Iab+B1IV+M2V");

    assert_eq!(palette.multi_star.len(), 2);
    let folded = palette.multi_star.iter().fold(palette.glow.unwrap(), |acc, sibling| {
        average_colors(acc, sibling.glow.unwrap())
    });
    assert_eq!(palette.averaged_multi, Some(folded));
    assert!(palette.multi_star.iter().all(|p| p.averaged_multi.is_none()));
}

#[test]
fn test_palette_json_shape() {
    let json = serde_json::to_value(star_palette("A5-M5III+G2V")).unwrap();

    for key in ["glow", "color", "rangedGlow", "averagedMulti"] {
        let hex = json[key].as_str().unwrap_or_else(|| panic!("{} missing", key));
        assert!(hex.starts_with('#') && hex.len() == 7, "{}: {}", key, hex);
    }
    assert_eq!(json["blackbodyColor"].as_array().unwrap().len(), 3);
    assert_eq!(json["multiStar"].as_array().unwrap().len(), 1);
}

#[test]
fn test_hotter_classes_are_bluer() {
    let hot = star_palette("O5V").glow.unwrap();
    let cool = star_palette("M5V").glow.unwrap();
    assert!(hot.2 > hot.0);
    assert!(cool.0 > cool.2);
}

// ==================== Temperature ====================

#[test]
fn test_temperature_clamp() {
    let estimator = TemperatureEstimator::new();

    assert_abs_diff_eq!(estimator.estimate(0.0), 30_000.0);
    assert_abs_diff_eq!(estimator.estimate(0.999_999_999), 800.0, epsilon = 1e-3);
    assert_abs_diff_eq!(estimator.estimate(1.0), 800.0);
    assert_eq!(estimate_temperature(0.0), estimator.estimate(0.0));
}

#[test]
fn test_star_temperature_follows_class() {
    let synthesizer = ColorSynthesizer::new();
    let kelvin = |input: &str| {
        synthesizer
            .temperature_kelvin(&parse_spectral_type(input), &mut Diagnostics::new())
            .unwrap()
    };

    assert_eq!(kelvin("WN2"), 141_000.0);
    assert!(kelvin("O5") > kelvin("G2"));
    assert!(kelvin("G2") > kelvin("M5"));
}

// ==================== Pipeline ====================

#[test]
fn test_pipeline_batch_with_diagnostics() {
    let stars = vec![
        StarInput::named("Betelgeuse", "M1-M2Ia-ab"),
        StarInput::named("Rigel", "B8Ia"),
        StarInput::named("Unknown", ""),
    ];
    let batch = AppearancePipeline::new().describe_batch(&stars);

    assert_eq!(batch.total_stars, 3);
    assert_eq!(batch.resolved_stars, 2);
    assert_eq!(batch.appearances[1].luminosity_rank, Some(1.0));
    assert!(batch.appearances[2].palette.glow.is_none());
    assert!(!batch.appearances[2].diagnostics.is_empty());
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn prop_total_coverage(input in spectral_type_strategy()) {
        let star = quiet_parse(&input);
        prop_assert_eq!(accounted_chars(&star), sorted_chars(&input));
    }

    #[test]
    fn prop_range_exclusivity(input in spectral_type_strategy()) {
        prop_assert!(!has_both_ranges(&quiet_parse(&input)));
    }

    #[test]
    fn prop_deterministic(input in spectral_type_strategy()) {
        prop_assert_eq!(quiet_parse(&input), quiet_parse(&input));

        let synthesizer = ColorSynthesizer::new();
        let star = quiet_parse(&input);
        prop_assert_eq!(
            synthesizer.synthesize_with_diagnostics(&star, &mut Diagnostics::quiet()),
            synthesizer.synthesize_with_diagnostics(&star, &mut Diagnostics::quiet())
        );
    }

    #[test]
    fn prop_single_star_palette_is_pruned(input in "[OBAFGKM][0-9](\\.5)?(V|IV|III|II|Ia|Iab|Ib)?") {
        let star = quiet_parse(&input);
        prop_assume!(star.range.is_none() && star.siblings.is_empty());

        let palette = ColorSynthesizer::new().synthesize(&star);
        prop_assert!(palette.ranged_glow.is_none());
        prop_assert!(palette.averaged_multi.is_none());
        prop_assert!(palette.multi_star.is_empty());
    }

    #[test]
    fn prop_non_darkening_average(
        a in any::<(u8, u8, u8)>(),
        b in any::<(u8, u8, u8)>(),
    ) {
        let a = Rgb(a.0, a.1, a.2);
        let b = Rgb(b.0, b.1, b.2);
        let v = Hsv::from_rgb(average_colors(a, b)).v;
        let expected = Hsv::from_rgb(a).v.max(Hsv::from_rgb(b).v);
        prop_assert!((v - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_temperature_within_table(position in -1.0f64..2.0) {
        let kelvin = estimate_temperature(position);
        prop_assert!((300.0..=100_000.0).contains(&kelvin));
    }
}
