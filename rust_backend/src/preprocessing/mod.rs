//! Per-star appearance pipeline.
//!
//! Runs parsing, palette synthesis, temperature estimation and luminosity
//! ranking for one star or a batch of stars, collecting diagnostics as it
//! goes.

pub mod pipeline;

pub use pipeline::{
    describe_star, to_json, AppearanceBatch, AppearanceConfig, AppearancePipeline,
    StarAppearance, StarInput,
};
