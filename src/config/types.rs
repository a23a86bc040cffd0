//! Typed configuration structures.

use crate::model::WeightVector;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
///
/// Loaded from a `.devrank.yaml` file when one is discovered, otherwise all
/// defaults. CLI arguments layer on top of whatever the file provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Category weights used for overall-score aggregation
    pub weights: WeightVector,
    /// Output settings
    pub output: OutputConfig,
    /// Behavior settings
    pub behavior: BehaviorConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout when unset)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Fail (exit 1) when the top overall score is below this threshold
    pub min_score: Option<u32>,
}

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Used for layering CLI arguments over file config: only fields the
    /// CLI actually set (non-default) override the file values.
    pub fn merge(&mut self, other: &Self) {
        if other.weights != WeightVector::default() {
            self.weights = other.weights;
        }
        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }
    }
}
