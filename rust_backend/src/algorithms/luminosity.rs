//! Luminosity rank estimation.
//!
//! Turns a luminosity class as written in a catalog (`V`, `Iab+`, `III-IV`,
//! `III/IV`) into a single rank between 0 (hypergiant) and 9 (white dwarf).

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::domain::StellarClassification;
use crate::core::tables::{KnowledgeTables, LUMINOSITY_RANK_MAX};

/// Rank offset of each trailing `+` ("slightly more luminous").
const PLUS_STEP: f64 = 0.5;

/// Rank of a luminosity token using the standard tables.
///
/// Joined tokens are averaged. Parts that cannot be recognised are reported
/// in `diagnostics` and skipped; `None` means nothing was recognised.
pub fn luminosity_rank(token: &str, diagnostics: &mut Diagnostics) -> Option<f64> {
    luminosity_rank_with_tables(KnowledgeTables::standard(), token, diagnostics)
}

pub fn luminosity_rank_with_tables(
    tables: &KnowledgeTables,
    token: &str,
    diagnostics: &mut Diagnostics,
) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if let Some(rank) = tables.luminosity_rank(token) {
        return Some(rank);
    }

    let mut sum = 0.0;
    let mut count = 0usize;
    for part in token.split(['-', '/']).filter(|part| !part.is_empty()) {
        match part_rank(tables, part) {
            Some(rank) => {
                sum += rank;
                count += 1;
            }
            None => diagnostics.push(Diagnostic::UnknownLuminosityClass {
                token: part.to_string(),
            }),
        }
    }

    (count > 0).then(|| sum / count as f64)
}

fn part_rank(tables: &KnowledgeTables, part: &str) -> Option<f64> {
    if let Some(rank) = tables.luminosity_rank(part) {
        return Some(rank);
    }
    let base = part.trim_end_matches('+');
    let pluses = part.len() - base.len();
    if pluses == 0 {
        return None;
    }
    let rank = tables.luminosity_rank(base)? - PLUS_STEP * pluses as f64;
    Some(rank.clamp(0.0, LUMINOSITY_RANK_MAX))
}

/// Rank of a parsed star's luminosity class, if it has one.
pub fn classification_luminosity_rank(
    star: &StellarClassification,
    diagnostics: &mut Diagnostics,
) -> Option<f64> {
    luminosity_rank(&star.luminosity_class, diagnostics)
}
