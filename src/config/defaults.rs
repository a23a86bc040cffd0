//! Named weight presets for common ranking intents.
//!
//! Presets mirror the use-case recommendations the analysis engine derives:
//! a gaming preset leans on performance and display, a budget preset on
//! price, and so on. The balanced preset weighs every category equally and
//! is the default everywhere.

use crate::model::WeightVector;

/// Named weight presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightPreset {
    /// Every category weighed equally
    Balanced,
    /// Performance and display first
    Gaming,
    /// Camera first
    Photography,
    /// Battery first
    BatteryLife,
    /// Price first
    Budget,
}

impl WeightPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Gaming => "gaming",
            Self::Photography => "photography",
            Self::BatteryLife => "battery-life",
            Self::Budget => "budget",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "balanced" | "default" => Some(Self::Balanced),
            "gaming" | "performance" => Some(Self::Gaming),
            "photography" | "camera" => Some(Self::Photography),
            "battery-life" | "battery" => Some(Self::BatteryLife),
            "budget" | "value" => Some(Self::Budget),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Balanced => "Every category weighed equally",
            Self::Gaming => "Performance and display quality above all",
            Self::Photography => "Camera capability above all",
            Self::BatteryLife => "Battery endurance above all",
            Self::Budget => "Price and included features above all",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Balanced,
            Self::Gaming,
            Self::Photography,
            Self::BatteryLife,
            Self::Budget,
        ]
    }

    /// The weight vector this preset stands for.
    #[must_use]
    pub const fn weights(&self) -> WeightVector {
        match self {
            Self::Balanced => WeightVector::uniform(1.0),
            Self::Gaming => WeightVector {
                price: 1.0,
                performance: 3.0,
                battery: 1.5,
                camera: 0.5,
                display: 2.5,
                design: 0.5,
                features: 1.0,
            },
            Self::Photography => WeightVector {
                price: 1.0,
                performance: 1.0,
                battery: 1.0,
                camera: 3.0,
                display: 1.5,
                design: 0.5,
                features: 1.0,
            },
            Self::BatteryLife => WeightVector {
                price: 1.5,
                performance: 1.0,
                battery: 3.0,
                camera: 0.5,
                display: 1.0,
                design: 0.5,
                features: 1.0,
            },
            Self::Budget => WeightVector {
                price: 3.0,
                performance: 1.0,
                battery: 1.0,
                camera: 1.0,
                display: 1.0,
                design: 0.5,
                features: 1.5,
            },
        }
    }
}

impl std::fmt::Display for WeightPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
