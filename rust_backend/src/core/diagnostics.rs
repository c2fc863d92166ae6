//! Non-fatal diagnostics raised while interpreting a classification.
//!
//! Nothing in the parsing or colour pipeline aborts on odd input. Fragments
//! that cannot be interpreted are recorded here and logged as warnings, and
//! processing carries on with whatever could be understood.

use serde::{Serialize, Serializer};

/// A single recoverable problem found while interpreting a star.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Diagnostic {
    #[error("unrecognised spectral class '{token}'")]
    UnknownSpectralClass { token: String },

    #[error("non-numeric subclass fragment '{fragment}'")]
    NonNumericSubclass { fragment: String },

    #[error("unrecognised luminosity class '{token}'")]
    UnknownLuminosityClass { token: String },

    #[error("no spectral class found in '{input}'")]
    UnresolvedClassification { input: String },
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Collects diagnostics for one star, logging each one as it arrives.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    subject: Option<String>,
    entries: Vec<Diagnostic>,
    logging: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            subject: None,
            entries: Vec::new(),
            logging: true,
        }
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics whose log lines are prefixed with the star's name.
    pub fn for_star(name: &str) -> Self {
        Self {
            subject: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Records without logging, for computations whose diagnostics have
    /// already been reported elsewhere.
    pub fn quiet() -> Self {
        Self {
            logging: false,
            ..Self::default()
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.logging {
            match &self.subject {
                Some(name) => log::warn!("[{}] {}", name, diagnostic),
                None => log::warn!("{}", diagnostic),
            }
        }
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_collects_in_order() {
        let mut diagnostics = Diagnostics::for_star("HD 1064");
        diagnostics.push(Diagnostic::UnknownLuminosityClass {
            token: "Q".to_string(),
        });
        diagnostics.push(Diagnostic::NonNumericSubclass {
            fragment: "x".to_string(),
        });

        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics.entries()[0],
            Diagnostic::UnknownLuminosityClass { .. }
        ));
    }

    #[test]
    fn test_display_and_serialize() {
        let diagnostic = Diagnostic::UnknownSpectralClass {
            token: "Z".to_string(),
        };
        assert_eq!(diagnostic.to_string(), "unrecognised spectral class 'Z'");
        assert_eq!(
            serde_json::to_value(&diagnostic).unwrap(),
            serde_json::json!("unrecognised spectral class 'Z'")
        );
    }
}
