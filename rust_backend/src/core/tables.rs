//! Static knowledge about the MK classification scheme.
//!
//! Every constant the parser and the colour pipeline rely on lives here, so
//! corrections to class ordering, luminosity synonyms or temperatures only
//! ever touch this file. The tables are plain data built once; the shared
//! instance is available through [`KnowledgeTables::standard`].
//!
//! # Luminosity ranks
//!
//! Ranks grow from the most luminous (0, hypergiant) to the least luminous
//! (9, white dwarf). They are deliberately non-uniform: `IIIa` is slightly
//! brighter than `III` while `IIIb` is slightly dimmer, so neither sits on an
//! even step between `III` and `IV`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Letters that may start (or make up) a spectral class token.
pub const SPECTRAL_CLASS_LETTERS: [char; 13] =
    ['O', 'B', 'A', 'F', 'G', 'K', 'M', 'L', 'T', 'Y', 'S', 'W', 'D'];

/// Characters allowed between class letters (`O/B`, `A-F`).
pub const CLASS_SEPARATORS: [char; 2] = ['/', '-'];

/// Second letters of white-dwarf classes (`DA`, `DB`, `DC`, `DO`, `DQ`, `DZ`).
pub const WHITE_DWARF_SUFFIXES: [char; 6] = ['A', 'B', 'C', 'O', 'Q', 'Z'];

/// Recognised luminosity tokens and their rank.
const LUMINOSITY_RANKS: [(&str, f64); 20] = [
    ("0", 0.0),
    ("Ia+", 0.0),
    ("Ia", 1.0),
    ("I", 2.0),
    ("Iab", 2.0),
    ("c", 3.0),
    ("Ib", 3.0),
    ("II", 4.0),
    ("IIIa", 4.8),
    ("g", 5.0),
    ("III", 5.0),
    ("IIIb", 5.2),
    ("sg", 6.0),
    ("IV", 6.0),
    ("d", 7.0),
    ("V", 7.0),
    ("sd", 8.0),
    ("VI", 8.0),
    ("D", 9.0),
    ("VII", 9.0),
];

/// Highest luminosity rank, used to normalise ranks to `0..=1`.
pub const LUMINOSITY_RANK_MAX: f64 = 9.0;

/// Position of each class token along the colour scale. Synonyms share a slot:
/// Wolf-Rayet stars sit with O, white dwarfs with B (roughly B0, 8.7k), and
/// S-type stars with M.
const CLASS_SCALE: [(&str, u8); 19] = [
    ("O", 0),
    ("W", 0),
    ("B", 1),
    ("D", 1),
    ("DA", 1),
    ("DB", 1),
    ("DC", 1),
    ("DO", 1),
    ("DQ", 1),
    ("DZ", 1),
    ("A", 2),
    ("F", 3),
    ("G", 4),
    ("K", 5),
    ("M", 6),
    ("S", 6),
    ("L", 7),
    ("T", 8),
    ("Y", 9),
];

/// Classes in temperature-table order, hottest first, with their Kelvin range.
const KELVIN_RANGES: [(&str, f64, f64); 10] = [
    ("O", 30_000.0, 100_000.0),
    ("B", 10_000.0, 30_000.0),
    ("A", 7_500.0, 10_000.0),
    ("F", 6_000.0, 7_500.0),
    ("G", 5_200.0, 6_000.0),
    ("K", 3_700.0, 5_200.0),
    ("M", 2_400.0, 3_700.0),
    ("L", 1_500.0, 2_400.0),
    ("T", 800.0, 1_500.0),
    ("Y", 300.0, 800.0),
];

/// Wolf-Rayet subtypes do not follow the continuous sequence.
const WOLF_RAYET_KELVIN: [(&str, f64); 19] = [
    ("WN2", 141_000.0),
    ("WN3", 85_000.0),
    ("WN4", 70_000.0),
    ("WN5", 60_000.0),
    ("WN5h", 50_000.0),
    ("WN6", 56_000.0),
    ("WN6h", 45_000.0),
    ("WN7", 50_000.0),
    ("WN7h", 45_000.0),
    ("WN8", 45_000.0),
    ("WN8h", 40_000.0),
    ("WN9h", 35_000.0),
    ("WO2", 200_000.0),
    ("WC4", 117_000.0),
    ("WC5", 83_000.0),
    ("WC6", 78_000.0),
    ("WC7", 71_000.0),
    ("WC8", 60_000.0),
    ("WC9", 44_000.0),
];

/// Blackbody colour anchors (Kelvin, sRGB). Values between anchors are
/// interpolated linearly; values outside are clamped.
const BLACKBODY_CURVE: [(f64, Rgb8); 21] = [
    (1_000.0, [255, 56, 0]),
    (1_500.0, [255, 109, 0]),
    (2_000.0, [255, 137, 18]),
    (2_500.0, [255, 161, 72]),
    (3_000.0, [255, 180, 107]),
    (3_500.0, [255, 196, 137]),
    (4_000.0, [255, 209, 163]),
    (4_500.0, [255, 219, 186]),
    (5_000.0, [255, 228, 206]),
    (5_500.0, [255, 236, 224]),
    (6_000.0, [255, 243, 239]),
    (6_500.0, [255, 249, 253]),
    (7_000.0, [245, 243, 255]),
    (8_000.0, [227, 233, 255]),
    (9_000.0, [214, 225, 255]),
    (10_000.0, [204, 219, 255]),
    (12_000.0, [191, 211, 255]),
    (15_000.0, [179, 204, 255]),
    (20_000.0, [168, 197, 255]),
    (30_000.0, [159, 191, 255]),
    (40_000.0, [155, 188, 255]),
];

type Rgb8 = [u8; 3];

/// Inclusive Kelvin range of one spectral class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KelvinRange {
    pub class: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Read-only lookup tables for the classification scheme.
#[derive(Debug, Clone)]
pub struct KnowledgeTables {
    class_scale: HashMap<&'static str, u8>,
    class_scale_length: u8,
    luminosity_ranks: HashMap<&'static str, f64>,
    kelvin_ranges: Vec<KelvinRange>,
    wolf_rayet_kelvin: HashMap<&'static str, f64>,
    blackbody_curve: Vec<(f64, Rgb8)>,
}

static STANDARD: Lazy<KnowledgeTables> = Lazy::new(KnowledgeTables::build);

impl KnowledgeTables {
    /// The shared standard tables.
    pub fn standard() -> &'static KnowledgeTables {
        &STANDARD
    }

    fn build() -> Self {
        Self {
            class_scale: CLASS_SCALE.iter().copied().collect(),
            class_scale_length: 10,
            luminosity_ranks: LUMINOSITY_RANKS.iter().copied().collect(),
            kelvin_ranges: KELVIN_RANGES
                .iter()
                .map(|&(class, min, max)| KelvinRange { class, min, max })
                .collect(),
            wolf_rayet_kelvin: WOLF_RAYET_KELVIN.iter().copied().collect(),
            blackbody_curve: BLACKBODY_CURVE.to_vec(),
        }
    }

    pub fn is_class_letter(&self, c: char) -> bool {
        SPECTRAL_CLASS_LETTERS.contains(&c)
    }

    /// Class letters plus the provisional separators `/` and `-`.
    pub fn is_class_char(&self, c: char) -> bool {
        self.is_class_letter(c) || CLASS_SEPARATORS.contains(&c)
    }

    /// Whether `c` extends the class token accumulated so far. After a lone
    /// `D` this also admits the white-dwarf suffixes.
    pub fn continues_class(&self, class: &str, c: char) -> bool {
        match class {
            "" => self.is_class_letter(c),
            "D" => self.is_class_char(c) || WHITE_DWARF_SUFFIXES.contains(&c),
            _ => self.is_class_char(c),
        }
    }

    pub fn is_subclass_char(&self, c: char) -> bool {
        c.is_ascii_digit() || matches!(c, '.' | '/' | '-')
    }

    pub fn is_luminosity(&self, token: &str) -> bool {
        self.luminosity_ranks.contains_key(token)
    }

    /// Whether some luminosity token starts with `prefix`.
    pub fn is_luminosity_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.luminosity_ranks.keys().any(|token| token.starts_with(prefix))
    }

    pub fn luminosity_rank(&self, token: &str) -> Option<f64> {
        self.luminosity_ranks.get(token).copied()
    }

    /// Colour-scale slot of a class token such as `B`, `DA` or `W`.
    pub fn class_scale_index(&self, token: &str) -> Option<u8> {
        self.class_scale.get(token).copied()
    }

    /// Number of slots on the colour scale.
    pub fn class_scale_length(&self) -> u8 {
        self.class_scale_length
    }

    pub fn kelvin_ranges(&self) -> &[KelvinRange] {
        &self.kelvin_ranges
    }

    pub fn kelvin_range(&self, class: &str) -> Option<KelvinRange> {
        self.kelvin_ranges.iter().find(|r| r.class == class).copied()
    }

    /// Fixed temperature of a Wolf-Rayet subtype, matched exactly.
    pub fn wolf_rayet_kelvin(&self, token: &str) -> Option<f64> {
        self.wolf_rayet_kelvin.get(token).copied()
    }

    pub(crate) fn blackbody_curve(&self) -> &[(f64, Rgb8)] {
        &self.blackbody_curve
    }
}
