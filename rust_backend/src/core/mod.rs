//! Core domain models and static knowledge for stellar classification.
//!
//! This module defines the classification tree and palette structures, the
//! read-only knowledge tables, and the diagnostic channel shared by the
//! parser and the colour pipeline.

pub mod diagnostics;
pub mod domain;
pub mod tables;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use domain::{ClassificationRange, Palette, RangeKind, Rgb, StellarClassification};
pub use tables::KnowledgeTables;
