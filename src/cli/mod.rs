//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand and returns the desired process exit code.

mod compare;
mod rank;
mod score;

pub use compare::{run_compare, CompareConfig};
pub use rank::{run_rank, RankConfig};
pub use score::{run_score, ScoreConfig};

use crate::config::WeightPreset;
use crate::model::WeightVector;
use anyhow::{bail, Result};

/// Resolve the effective weight vector from CLI arguments.
///
/// A named preset wins over config-file weights; with neither, the config
/// weights (default uniform) apply.
pub fn resolve_weights(preset: Option<&str>, config_weights: WeightVector) -> Result<WeightVector> {
    match preset {
        None => Ok(config_weights),
        Some(name) => match WeightPreset::from_name(name) {
            Some(preset) => Ok(preset.weights()),
            None => {
                let valid: Vec<&str> = WeightPreset::all().iter().map(|p| p.name()).collect();
                bail!(
                    "Unknown weight preset: {name}. Valid options: {}",
                    valid.join(", ")
                );
            }
        },
    }
}
