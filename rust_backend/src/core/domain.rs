//! Domain models for parsed stellar classifications and their display colours.
//!
//! This module defines the two structures that flow through the crate:
//! [`StellarClassification`], the recursive tree produced by the spectral
//! parser, and [`Palette`], the set of colours derived from it.

use serde::{Serialize, Serializer};

/// Relationship between a classification and the partner it is ranged with.
///
/// `A1-F1` describes a star *between* the two classes ([`RangeKind::To`]),
/// while `A1/F1` describes a star that is *either* one *or* the other
/// ([`RangeKind::Or`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    To,
    Or,
}

impl RangeKind {
    /// Maps a range separator character to its kind.
    pub fn from_separator(separator: char) -> Option<Self> {
        match separator {
            '-' => Some(Self::To),
            '/' => Some(Self::Or),
            _ => None,
        }
    }

    pub fn separator(self) -> char {
        match self {
            Self::To => '-',
            Self::Or => '/',
        }
    }
}

/// A range partner. Holding it in an enum makes `rangeTo` and `rangeOr`
/// mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClassificationRange {
    #[serde(rename = "rangeTo")]
    To(Box<StellarClassification>),
    #[serde(rename = "rangeOr")]
    Or(Box<StellarClassification>),
}

impl ClassificationRange {
    pub fn new(kind: RangeKind, partner: StellarClassification) -> Self {
        match kind {
            RangeKind::To => Self::To(Box::new(partner)),
            RangeKind::Or => Self::Or(Box::new(partner)),
        }
    }

    pub fn kind(&self) -> RangeKind {
        match self {
            Self::To(_) => RangeKind::To,
            Self::Or(_) => RangeKind::Or,
        }
    }

    pub fn partner(&self) -> &StellarClassification {
        match self {
            Self::To(partner) | Self::Or(partner) => partner,
        }
    }

    fn partner_mut(&mut self) -> &mut StellarClassification {
        match self {
            Self::To(partner) | Self::Or(partner) => partner,
        }
    }
}

/// A parsed MK classification, e.g. `B1Iab` or `A5-F1III/IVm`.
///
/// Fields hold the raw text the parser accepted for each grammar slot. Empty
/// strings mean "not specified". Classifications are built once per parse and
/// never mutated afterwards by the public API.
///
/// # Examples
///
/// ```
/// use starfield_spectra::parsing::parse_spectral_type;
///
/// let star = parse_spectral_type("B1Iab+B3V");
/// assert_eq!(star.spectral_class, "B");
/// assert_eq!(star.luminosity_class, "Iab");
/// assert_eq!(star.siblings.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarClassification {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spectral_class: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spectral_subclass: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub luminosity_class: String,
    #[serde(flatten)]
    pub range: Option<ClassificationRange>,
    /// S-type temperature index (the `7` in `S7/4`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// S-type abundance index (the `4` in `S7/4`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub siblings: Vec<StellarClassification>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub peculiarities: String,
    /// Set when `luminosity_class` was copied from the range partner.
    #[serde(skip)]
    pub luminosity_inherited: bool,
}

impl StellarClassification {
    pub fn range_to(&self) -> Option<&StellarClassification> {
        match &self.range {
            Some(ClassificationRange::To(partner)) => Some(partner),
            _ => None,
        }
    }

    pub fn range_or(&self) -> Option<&StellarClassification> {
        match &self.range {
            Some(ClassificationRange::Or(partner)) => Some(partner),
            _ => None,
        }
    }

    /// The range partner regardless of its kind.
    pub fn range_partner(&self) -> Option<&StellarClassification> {
        self.range.as_ref().map(ClassificationRange::partner)
    }

    pub fn is_s_type(&self) -> bool {
        self.spectral_class == "S"
    }

    /// Returns `true` if nothing at all was recognised for this node.
    pub fn is_unresolved(&self) -> bool {
        self.spectral_class.is_empty()
            && self.spectral_subclass.is_empty()
            && self.luminosity_class.is_empty()
            && self.range.is_none()
            && self.siblings.is_empty()
    }

    /// Attaches a range partner, hoisting its luminosity class when this node
    /// has none. An existing range is extended at its far end so that chains
    /// like `A0-A5-F0` nest instead of overwriting.
    pub(crate) fn attach_range(&mut self, kind: RangeKind, partner: StellarClassification) {
        if self.luminosity_class.is_empty() && !partner.luminosity_class.is_empty() {
            self.luminosity_class = partner.luminosity_class.clone();
            self.luminosity_inherited = true;
        }
        match &mut self.range {
            Some(existing) => existing.partner_mut().attach_range(kind, partner),
            None => self.range = Some(ClassificationRange::new(kind, partner)),
        }
    }

    /// Every input character this tree accounts for structurally, including
    /// the separators implied by ranges (`-`, `/`), siblings (`+`) and S-type
    /// indices (`/`). Inherited luminosity is counted only at its origin.
    ///
    /// Together with [`peculiarities`](Self::peculiarities) this is a
    /// permutation of the parsed input.
    pub fn structured_characters(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.spectral_class);
        out.push_str(&self.spectral_subclass);
        if !self.luminosity_inherited {
            out.push_str(&self.luminosity_class);
        }
        if let Some(x) = &self.x {
            out.push_str(x);
        }
        if let Some(y) = &self.y {
            out.push('/');
            out.push_str(y);
        }
        if let Some(range) = &self.range {
            out.push(range.kind().separator());
            out.push_str(&range.partner().structured_characters());
        }
        for sibling in &self.siblings {
            out.push('+');
            out.push_str(&sibling.structured_characters());
        }
        out
    }
}

/// An 8-bit sRGB colour. Serialises as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Formats as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn max_channel(self) -> u8 {
        self.0.max(self.1).max(self.2)
    }
}

fn serialize_hex<S: Serializer>(color: &Option<Rgb>, serializer: S) -> Result<S::Ok, S::Error> {
    match color {
        Some(rgb) => serializer.serialize_str(&rgb.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// Display colours for one star (or one member of a multiple system).
///
/// Colour fields are `None` when the star's spectral class could not be
/// resolved; an absent colour is a valid outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Colour for distant, point-source viewing.
    #[serde(serialize_with = "serialize_hex", skip_serializing_if = "Option::is_none")]
    pub glow: Option<Rgb>,
    /// Brightened "cartoon" variant of `glow` for close-up rendering.
    #[serde(serialize_with = "serialize_hex", skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blackbody_color: Option<Rgb>,
    /// Glow averaged with the range partner; omitted when equal to `glow`.
    #[serde(serialize_with = "serialize_hex", skip_serializing_if = "Option::is_none")]
    pub ranged_glow: Option<Rgb>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub multi_star: Vec<Palette>,
    /// Single glow for the whole system; top level only, omitted when equal
    /// to `glow`.
    #[serde(serialize_with = "serialize_hex", skip_serializing_if = "Option::is_none")]
    pub averaged_multi: Option<Rgb>,
}

impl Palette {
    /// The colour this node contributes when folded into a system average.
    pub fn effective_glow(&self) -> Option<Rgb> {
        self.ranged_glow.or(self.glow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(class: &str, subclass: &str, luminosity: &str) -> StellarClassification {
        StellarClassification {
            spectral_class: class.to_string(),
            spectral_subclass: subclass.to_string(),
            luminosity_class: luminosity.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_attach_range_hoists_luminosity() {
        let mut parent = star("A", "5", "");
        parent.attach_range(RangeKind::To, star("F", "1", "III"));

        assert_eq!(parent.luminosity_class, "III");
        assert!(parent.luminosity_inherited);
        assert_eq!(parent.range_to().unwrap().luminosity_class, "III");
        assert!(parent.range_or().is_none());
    }

    #[test]
    fn test_attach_range_keeps_own_luminosity() {
        let mut parent = star("B", "9", "IV");
        parent.attach_range(RangeKind::Or, star("A", "0", "V"));

        assert_eq!(parent.luminosity_class, "IV");
        assert!(!parent.luminosity_inherited);
        assert!(parent.range_or().is_some());
    }

    #[test]
    fn test_attach_range_chains() {
        let mut parent = star("A", "0", "");
        parent.attach_range(RangeKind::To, star("A", "5", ""));
        parent.attach_range(RangeKind::To, star("F", "0", ""));

        let middle = parent.range_to().unwrap();
        assert_eq!(middle.spectral_subclass, "5");
        assert_eq!(middle.range_to().unwrap().spectral_class, "F");
    }

    #[test]
    fn test_structured_characters_counts_separators() {
        let mut parent = star("A", "5", "");
        parent.attach_range(RangeKind::To, star("F", "1", "III"));
        parent.siblings.push(star("B", "3", "V"));

        assert_eq!(parent.structured_characters(), "A5-F1III+B3V");
    }

    #[test]
    fn test_serialize_range_and_omissions() {
        let mut parent = star("A", "5", "");
        parent.attach_range(RangeKind::Or, star("F", "1", ""));

        let json = serde_json::to_value(&parent).unwrap();
        assert_eq!(json["spectralClass"], "A");
        assert_eq!(json["rangeOr"]["spectralClass"], "F");
        assert!(json.get("rangeTo").is_none());
        assert!(json.get("luminosityClass").is_none());
        assert!(json.get("siblings").is_none());
        assert!(json.get("luminosityInherited").is_none());
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb(255, 16, 0).to_hex(), "#ff1000");
        assert_eq!(Rgb(10, 200, 30).max_channel(), 200);
    }

    #[test]
    fn test_palette_serializes_hex_and_triple() {
        let palette = Palette {
            glow: Some(Rgb(0, 0, 255)),
            color: Some(Rgb(90, 90, 255)),
            blackbody_color: Some(Rgb(155, 188, 255)),
            ..Default::default()
        };

        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(json["glow"], "#0000ff");
        assert_eq!(json["blackbodyColor"], serde_json::json!([155, 188, 255]));
        assert!(json.get("rangedGlow").is_none());
        assert!(json.get("multiStar").is_none());
        assert!(json.get("averagedMulti").is_none());
    }
}
