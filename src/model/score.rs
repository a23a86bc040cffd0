//! Score and weight types shared by the scoring and ranking engines.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The seven scoring categories, in canonical order.
///
/// The declaration order is the canonical iteration order used wherever
/// ordering matters (strength/weakness selection, category winners, report
/// columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Price,
    Performance,
    Battery,
    Camera,
    Display,
    Design,
    Features,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 7] = [
        Category::Price,
        Category::Performance,
        Category::Battery,
        Category::Camera,
        Category::Display,
        Category::Design,
        Category::Features,
    ];

    /// Human-readable category name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Performance => "Performance",
            Self::Battery => "Battery",
            Self::Camera => "Camera",
            Self::Display => "Display",
            Self::Design => "Design",
            Self::Features => "Features",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One score per category, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub price: f64,
    pub performance: f64,
    pub battery: f64,
    pub camera: f64,
    pub display: f64,
    pub design: f64,
    pub features: f64,
}

impl CategoryScores {
    /// Get the score for a category
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Price => self.price,
            Category::Performance => self.performance,
            Category::Battery => self.battery,
            Category::Camera => self.camera,
            Category::Display => self.display,
            Category::Design => self.design,
            Category::Features => self.features,
        }
    }

    /// Scores as an array in canonical category order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 7] {
        [
            self.price,
            self.performance,
            self.battery,
            self.camera,
            self.display,
            self.design,
            self.features,
        ]
    }

    /// Iterate (category, score) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Caller-supplied weights for overall score aggregation.
///
/// Weights are relative, not percentages; they are normalized by their sum
/// during aggregation. All weights must be finite and non-negative - config
/// file validation enforces this, the aggregator itself only guards the
/// all-zero case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeightVector {
    pub price: f64,
    pub performance: f64,
    pub battery: f64,
    pub camera: f64,
    pub display: f64,
    pub design: f64,
    pub features: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl WeightVector {
    /// All categories at the same weight
    #[must_use]
    pub const fn uniform(weight: f64) -> Self {
        Self {
            price: weight,
            performance: weight,
            battery: weight,
            camera: weight,
            display: weight,
            design: weight,
            features: weight,
        }
    }

    /// Get the weight for a category
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Price => self.price,
            Category::Performance => self.performance,
            Category::Battery => self.battery,
            Category::Camera => self.camera,
            Category::Display => self.display,
            Category::Design => self.design,
            Category::Features => self.features,
        }
    }

    /// Weights as an array in canonical category order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 7] {
        [
            self.price,
            self.performance,
            self.battery,
            self.camera,
            self.display,
            self.design,
            self.features,
        ]
    }

    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Letter grade derived from an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Grade {
    /// Excellent: 90-100
    A,
    /// Good: 80-89
    B,
    /// Fair: 70-79
    C,
    /// Poor: 60-69
    D,
    /// Failing: <60
    F,
}

impl Grade {
    /// Create grade from score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            90..=100 => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    /// Get grade letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// Scored device - one per device per ranking run.
///
/// `rank` is 0 until assigned by the ranking engine; ranks are 1-based
/// sequential positions after sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct DeviceScore {
    /// Source device id
    pub device_id: String,
    /// Source device display name
    pub device_name: String,
    /// Weighted overall score, rounded to the nearest integer (0-100)
    pub overall: u32,
    /// Per-category scores
    pub categories: CategoryScores,
    /// 1-based position after ranking; 0 while unranked
    pub rank: usize,
    /// Categories scoring >= 80, at most 3, in canonical order
    pub strengths: Vec<Category>,
    /// Categories scoring <= 40, at most 2, in canonical order
    pub weaknesses: Vec<Category>,
}

impl DeviceScore {
    /// Letter grade for the overall score
    #[must_use]
    pub const fn grade(&self) -> Grade {
        Grade::from_score(self.overall)
    }
}
