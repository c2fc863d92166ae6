//! Morgan-Keenan spectral type parser.
//!
//! The parser is a single left-to-right scan driven by an explicit state
//! machine (`class -> subclass -> luminosity`). It never fails: every input
//! character either lands in a structured field or in the `peculiarities`
//! residue of the primary star.
//!
//! Star boundaries come in two flavours:
//!
//! - `+` followed by a class letter closes the current star and starts a
//!   sibling (`B1Iab+B3V`).
//! - `-` or `/` followed by a class letter closes the current star and
//!   starts a range partner (`A5-F1III`, `B9/A0V`).
//!
//! A `+` that is *not* followed by a class letter is read as part of the
//! luminosity class (`Ia+`). Local lookahead cannot tell these apart for
//! every notation found in catalogs; `B0Ia+B1` is always read as a binary.

use crate::core::diagnostics::{Diagnostic, Diagnostics};
use crate::core::domain::{RangeKind, StellarClassification};
use crate::core::tables::KnowledgeTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningClass,
    ScanningSubclass,
    ScanningLuminosity,
}

#[derive(Debug, Clone, Copy)]
enum StarBoundary {
    Sibling,
    Range(RangeKind),
    End,
}

enum Step {
    Advance(usize),
    Stop,
}

/// Parses spectral type strings against a set of knowledge tables.
#[derive(Debug, Clone, Copy)]
pub struct SpectralParser<'t> {
    tables: &'t KnowledgeTables,
}

impl SpectralParser<'static> {
    /// Parser backed by the standard tables.
    pub fn new() -> Self {
        Self::with_tables(KnowledgeTables::standard())
    }
}

impl Default for SpectralParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> SpectralParser<'t> {
    pub fn with_tables(tables: &'t KnowledgeTables) -> Self {
        Self { tables }
    }

    /// Parses one classification, logging any diagnostics.
    pub fn parse(&self, input: &str) -> StellarClassification {
        let mut diagnostics = Diagnostics::new();
        self.parse_with_diagnostics(input, &mut diagnostics)
    }

    /// Parses one classification, recording rejected luminosity tokens in
    /// `diagnostics`.
    pub fn parse_with_diagnostics(
        &self,
        input: &str,
        diagnostics: &mut Diagnostics,
    ) -> StellarClassification {
        let chars: Vec<char> = input.chars().collect();
        let mut scanner = Scanner::new(self.tables, diagnostics);

        // One position past the end so buffered tokens are flushed.
        let mut i = 0;
        while i <= chars.len() {
            match scanner.step(&chars, i) {
                Step::Advance(n) => i += n,
                Step::Stop => break,
            }
        }

        scanner.finish()
    }

    /// Parses many classifications.
    pub fn parse_batch(&self, inputs: &[&str]) -> Vec<StellarClassification> {
        inputs.iter().map(|input| self.parse(input)).collect()
    }
}

/// Parses `input` with the standard tables.
pub fn parse_spectral_type(input: &str) -> StellarClassification {
    SpectralParser::new().parse(input)
}

struct Scanner<'t, 'd> {
    tables: &'t KnowledgeTables,
    diagnostics: &'d mut Diagnostics,
    state: ScanState,
    current: StellarClassification,
    /// Luminosity characters not yet committed or rejected.
    token: String,
    peculiarities: String,
    completed: Vec<StellarClassification>,
    pending_range: Option<RangeKind>,
}

impl<'t, 'd> Scanner<'t, 'd> {
    fn new(tables: &'t KnowledgeTables, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            tables,
            diagnostics,
            state: ScanState::ScanningClass,
            current: StellarClassification::default(),
            token: String::new(),
            peculiarities: String::new(),
            completed: Vec::new(),
            pending_range: None,
        }
    }

    fn step(&mut self, chars: &[char], i: usize) -> Step {
        if self.current.is_s_type() {
            self.split_s_type(&chars[i..]);
            return Step::Stop;
        }

        let Some(ch) = chars.get(i).copied() else {
            return Step::Stop;
        };
        let next = chars.get(i + 1).copied();

        if self.current.spectral_class == "W"
            && matches!(ch, 'N' | 'C' | 'O')
            && self.state != ScanState::ScanningLuminosity
        {
            return self.consume_wolf_rayet(chars, i);
        }

        if ch == '+' && self.starts_class(next) {
            self.close_star(StarBoundary::Sibling);
            return Step::Advance(1);
        }

        match self.state {
            ScanState::ScanningClass => self.scan_class(ch, next),
            ScanState::ScanningSubclass => self.scan_subclass(ch, next),
            ScanState::ScanningLuminosity => self.scan_luminosity(ch, next),
        }
    }

    fn starts_class(&self, c: Option<char>) -> bool {
        c.is_some_and(|c| self.tables.is_class_letter(c))
    }

    fn range_boundary(&self, ch: char, next: Option<char>) -> Option<RangeKind> {
        if self.starts_class(next) {
            RangeKind::from_separator(ch)
        } else {
            None
        }
    }

    /// Everything after an `S` class is two opaque indices split on `/`.
    fn split_s_type(&mut self, rest: &[char]) {
        if rest.is_empty() {
            return;
        }
        let rest: String = rest.iter().collect();
        match rest.split_once('/') {
            Some((x, y)) => {
                self.current.x = Some(x.to_string());
                self.current.y = Some(y.to_string());
            }
            None => self.current.x = Some(rest),
        }
    }

    /// `WN6h`: the subtype letter, one digit and an optional `h` belong to
    /// the class token.
    fn consume_wolf_rayet(&mut self, chars: &[char], i: usize) -> Step {
        let class = &mut self.current.spectral_class;
        class.push(chars[i]);
        let mut consumed = 1;

        if let Some(digit) = chars.get(i + 1).filter(|c| c.is_ascii_digit()) {
            class.push(*digit);
            consumed += 1;
            if chars.get(i + 2) == Some(&'h') {
                class.push('h');
                consumed += 1;
            }
        }

        self.state = ScanState::ScanningSubclass;
        Step::Advance(consumed)
    }

    fn scan_class(&mut self, ch: char, next: Option<char>) -> Step {
        if self.tables.continues_class(&self.current.spectral_class, ch) {
            self.current.spectral_class.push(ch);
            let continues = next
                .is_some_and(|n| self.tables.continues_class(&self.current.spectral_class, n));
            if !continues {
                self.state = ScanState::ScanningSubclass;
            }
        } else {
            self.peculiarities.push(ch);
        }
        Step::Advance(1)
    }

    fn scan_subclass(&mut self, ch: char, next: Option<char>) -> Step {
        if let Some(kind) = self.range_boundary(ch, next) {
            self.close_star(StarBoundary::Range(kind));
            return Step::Advance(1);
        }

        if !self.tables.is_subclass_char(ch) {
            // Re-read this character as the start of the luminosity class.
            self.state = ScanState::ScanningLuminosity;
            return Step::Advance(0);
        }

        self.current.spectral_subclass.push(ch);
        if !next.is_some_and(|n| self.tables.is_subclass_char(n)) {
            self.state = ScanState::ScanningLuminosity;
        }
        Step::Advance(1)
    }

    fn scan_luminosity(&mut self, ch: char, next: Option<char>) -> Step {
        match ch {
            '-' | '/' => {
                self.flush_token();
                if let Some(kind) = self.range_boundary(ch, next) {
                    self.close_star(StarBoundary::Range(kind));
                } else if self.luminosity_joinable() && self.starts_luminosity(next) {
                    self.current.luminosity_class.push(ch);
                } else {
                    self.peculiarities.push(ch);
                }
            }
            '+' if !self.extends_token('+') => {
                self.flush_token();
                if self.luminosity_joinable() {
                    self.current.luminosity_class.push('+');
                } else {
                    self.peculiarities.push('+');
                }
            }
            _ => {
                if self.token.is_empty() && !self.accepting_luminosity() {
                    self.peculiarities.push(ch);
                } else {
                    self.token.push(ch);
                    self.try_commit(next);
                }
            }
        }
        Step::Advance(1)
    }

    fn extends_token(&self, c: char) -> bool {
        let mut candidate = self.token.clone();
        candidate.push(c);
        self.tables.is_luminosity_prefix(&candidate)
    }

    fn starts_luminosity(&self, c: Option<char>) -> bool {
        c.is_some_and(|c| self.tables.is_luminosity_prefix(&c.to_string()))
    }

    /// A new luminosity token may start: none committed yet, or the last one
    /// ended in a joining separator.
    fn accepting_luminosity(&self) -> bool {
        let luminosity = &self.current.luminosity_class;
        luminosity.is_empty() || luminosity.ends_with(['-', '/'])
    }

    fn luminosity_joinable(&self) -> bool {
        let luminosity = &self.current.luminosity_class;
        !luminosity.is_empty() && !luminosity.ends_with(['-', '/'])
    }

    /// Keeps accumulating while the token can still grow into a known
    /// luminosity class, otherwise settles it.
    fn try_commit(&mut self, next: Option<char>) {
        if next.is_some_and(|n| self.extends_token(n)) {
            return;
        }
        self.flush_token();
    }

    fn flush_token(&mut self) {
        if self.token.is_empty() {
            return;
        }
        let token = std::mem::take(&mut self.token);
        if self.tables.is_luminosity(&token) {
            self.current.luminosity_class.push_str(&token);
        } else {
            // Lower-case suffixes are peculiarity codes, not failed luminosity classes.
            if token.starts_with(|c: char| c.is_ascii_uppercase()) {
                self.diagnostics.push(Diagnostic::UnknownLuminosityClass {
                    token: token.clone(),
                });
            }
            self.peculiarities.push_str(&token);
        }
    }

    fn close_star(&mut self, boundary: StarBoundary) {
        self.flush_token();
        let star = std::mem::take(&mut self.current);

        match self.pending_range.take() {
            Some(kind) => match self.completed.last_mut() {
                Some(previous) => previous.attach_range(kind, star),
                None => self.completed.push(star),
            },
            None => self.completed.push(star),
        }

        if let StarBoundary::Range(kind) = boundary {
            self.pending_range = Some(kind);
        }
        self.state = ScanState::ScanningClass;
    }

    fn finish(mut self) -> StellarClassification {
        self.close_star(StarBoundary::End);

        let mut stars = self.completed.into_iter();
        let mut primary = stars.next().unwrap_or_default();
        primary.siblings.extend(stars);
        primary.peculiarities = self.peculiarities;
        primary
    }
}
