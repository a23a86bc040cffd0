//! Configuration module for devrank.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named weight presets for common ranking intents
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.devrank.yaml` file in your project root or `~/.config/devrank/`:
//!
//! ```yaml
//! weights:
//!   camera: 3.0
//!   price: 1.5
//! behavior:
//!   min_score: 60
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::WeightPreset;
pub use types::{AppConfig, BehaviorConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.devrank.yaml` config files. It can be used by editors for validation
/// and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
