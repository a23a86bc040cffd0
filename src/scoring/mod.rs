//! Device scoring engine.
//!
//! Converts heterogeneous, optionally-missing device specifications into
//! comparable 0-100 scores:
//!
//! - **Extraction** ([`SpecExtractor`], [`coerce_number`]): typed accessors
//!   over free-text spec/feature lists with default-on-miss behavior.
//! - **Category scoring** ([`score_categories`] and the seven `score_*`
//!   functions): price is set-relative, the other six categories score
//!   against fixed reference thresholds.
//! - **Aggregation** ([`score_device`], [`score_catalog`]): weighted overall
//!   score plus strength/weakness classification.
//!
//! Everything here is pure and side-effect free; malformed or missing input
//! is a missing signal, never an error.
//!
//! # Usage
//!
//! ```
//! use devrank::model::{DeviceRecord, WeightVector};
//! use devrank::scoring::score_catalog;
//!
//! let catalog = vec![DeviceRecord::new("a", "Phone A")];
//! let scored = score_catalog(&catalog, &WeightVector::default());
//! assert_eq!(scored[0].device_id, "a");
//! ```

mod aggregate;
mod categories;
mod extract;

pub use aggregate::{
    aggregate_overall, classify_strengths, classify_weaknesses, score_catalog, score_device,
};
pub use categories::{
    score_battery, score_camera, score_categories, score_design, score_display, score_features,
    score_performance, score_price, NEUTRAL_SCORE,
};
pub use extract::{coerce_number, SpecExtractor};
