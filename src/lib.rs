//! **A multi-criteria scoring and ranking engine for device catalogs.**
//!
//! `devrank` converts heterogeneous, incomplete device specifications into
//! comparable 0-100 scores, ranks a catalog under adjustable category
//! weights, and derives cross-device analyses: the outright winner, the
//! best-value pick, per-category winners, and use-case recommendations.
//! It powers both a command-line interface and a Rust library for embedding
//! in larger applications.
//!
//! ## Key Features
//!
//! - **Tolerant spec extraction**: free-text specification values
//!   ("5000mAh", "1.5GHz", "108MP") are coerced to numbers best-effort;
//!   missing or malformed data degrades to documented neutral defaults and
//!   never errors.
//! - **Seven category scorers**: price (set-relative), performance,
//!   battery, camera, display, design, and features, each a pure function
//!   returning a 0-100 score.
//! - **Weighted aggregation**: one overall score per device under a
//!   caller-supplied weight vector, with strength/weakness classification.
//! - **Ranking and analysis**: stable descending sort under five sort keys,
//!   sequential 1-based ranks, and derived comparison analysis.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The input entity [`DeviceRecord`] and derived types
//!   ([`DeviceScore`], [`WeightVector`], [`Category`]).
//! - **[`catalog`]**: JSON catalog ingestion.
//! - **[`scoring`]**: Spec extraction, the seven category scorers, and the
//!   weighted aggregator. Pure functions throughout.
//! - **[`ranking`]**: The [`RankingEngine`] with sort keys, rank
//!   assignment, and [`ComparisonAnalysis`].
//! - **[`config`]**: Weight presets, YAML config files, validation.
//! - **[`reports`]**: JSON, Markdown, summary, and CSV renderers.
//!
//! ## Getting Started: Ranking a Catalog
//!
//! ```
//! use devrank::model::{DeviceRecord, Money, SpecEntry, WeightVector};
//! use devrank::ranking::RankingEngine;
//!
//! let mut budget = DeviceRecord::new("budget-5", "Budget Five");
//! budget.current_price = Some(Money::usd(249.0));
//! budget.specifications = vec![SpecEntry::new("battery", "Battery", "5000mAh")];
//!
//! let mut flagship = DeviceRecord::new("ultra-x", "Ultra X");
//! flagship.current_price = Some(Money::usd(1099.0));
//! flagship.specifications = vec![SpecEntry::new("camera", "Main Camera", "108MP")];
//!
//! let catalog = vec![budget, flagship];
//! let engine = RankingEngine::new(WeightVector::default());
//!
//! let ranked = engine.rank(&catalog);
//! assert_eq!(ranked[0].rank, 1);
//!
//! let analysis = engine.analyze(&catalog).expect("non-empty catalog");
//! println!("{}", analysis.summary);
//! ```
//!
//! ## Scoring With Custom Weights
//!
//! ```
//! use devrank::config::WeightPreset;
//! use devrank::model::DeviceRecord;
//! use devrank::ranking::RankingEngine;
//!
//! let catalog = vec![DeviceRecord::new("a", "Phone A")];
//! let engine = RankingEngine::new(WeightPreset::Photography.weights());
//! let ranked = engine.rank(&catalog);
//! assert_eq!(ranked.len(), 1);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize/u64 to f64 casts are pervasive in scoring math and
    // all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod ranking;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use catalog::{parse_catalog, parse_catalog_str};
pub use config::{AppConfig, ConfigError, Validatable, WeightPreset};
pub use error::{DevRankError, ErrorContext, OptionContext, Result};
pub use model::{
    Category, CategoryScores, DeviceRecord, DeviceScore, FeatureFlag, Grade, Money, SpecEntry,
    WeightVector,
};
pub use ranking::{ComparisonAnalysis, RankingEngine, SortKey, UseCasePicks};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{score_catalog, score_categories, score_device, SpecExtractor};
