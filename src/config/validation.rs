//! Configuration validation.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::model::{Category, WeightVector};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.weights.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for WeightVector {
    /// Weights must be finite and non-negative. An all-zero vector is
    /// permitted - the aggregator defines its outcome (every device ties
    /// at 0) rather than erroring.
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for category in Category::ALL {
            let weight = self.get(category);
            if !weight.is_finite() || weight < 0.0 {
                errors.push(ConfigError {
                    field: format!("weights.{}", category.name().to_lowercase()),
                    message: format!("Weight must be finite and non-negative, got {weight}"),
                });
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if min_score > 100 {
                errors.push(ConfigError {
                    field: "behavior.min_score".to_string(),
                    message: format!("Score threshold must be 0-100, got {min_score}"),
                });
            }
        }
        errors
    }
}
