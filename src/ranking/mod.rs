//! Ranking engine: sorting, rank assignment, and cross-device analysis.
//!
//! Turns a batch of device records into an ordered list of scored devices
//! under a caller-chosen sort key, and derives secondary analyses (winner,
//! best value, category winners, use-case picks) on request.
//!
//! # Rank assignment
//!
//! Ranks are 1-based sequential positions after a stable descending sort.
//! Devices with equal sort metrics receive consecutive distinct ranks in
//! input order - there is no shared-rank ("1, 1, 3") scheme. This mirrors
//! the behavior downstream consumers already render and is kept for output
//! parity; see DESIGN.md.

mod analysis;

pub use analysis::{ComparisonAnalysis, UseCasePicks};

use crate::model::{DeviceRecord, DeviceScore, WeightVector};
use crate::scoring::score_catalog;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Assumed age for devices without a release date when computing trend
/// momentum, in days.
const DEFAULT_AGE_DAYS: i64 = 30;

/// Sort key for ranking a scored catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Weighted overall score
    #[default]
    Overall,
    /// Trend momentum: views per day since release
    Trend,
    /// Value: rating-to-price ratio
    Value,
    /// Popularity: raw view count
    Popularity,
    /// Recency: release date, newest first
    Recency,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::Overall => "overall",
            SortKey::Trend => "trend",
            SortKey::Value => "value",
            SortKey::Popularity => "popularity",
            SortKey::Recency => "recency",
        };
        f.write_str(name)
    }
}

/// Ranking engine over a weight configuration.
///
/// Stateless between calls: every ranking run scores the input fresh and
/// returns a new result. The reference date only affects the trend sort key
/// and defaults to today; tests pin it for determinism.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    weights: WeightVector,
    reference_date: NaiveDate,
}

impl RankingEngine {
    /// Create an engine with the given weights and today as reference date
    #[must_use]
    pub fn new(weights: WeightVector) -> Self {
        Self {
            weights,
            reference_date: chrono::Utc::now().date_naive(),
        }
    }

    /// Pin the reference date used for trend momentum
    #[must_use]
    pub const fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// The weight vector this engine ranks under
    #[must_use]
    pub const fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Rank a catalog by overall score (the default sort key)
    #[must_use]
    pub fn rank(&self, catalog: &[DeviceRecord]) -> Vec<DeviceScore> {
        self.rank_by(catalog, SortKey::Overall)
    }

    /// Rank a catalog by the given sort key, descending.
    ///
    /// An empty catalog yields an empty ranking. Returned scores carry
    /// 1-based sequential ranks in sorted order.
    #[must_use]
    pub fn rank_by(&self, catalog: &[DeviceRecord], key: SortKey) -> Vec<DeviceScore> {
        let (scores, order) = self.score_and_order(catalog, key);
        let mut ranked: Vec<DeviceScore> =
            order.iter().map(|&index| scores[index].clone()).collect();
        for (position, score) in ranked.iter_mut().enumerate() {
            score.rank = position + 1;
        }
        ranked
    }

    /// Derive the cross-device analysis for a catalog.
    ///
    /// Returns `None` for an empty catalog. The analysis is always computed
    /// over the default overall-score ranking regardless of any display sort
    /// the caller uses.
    #[must_use]
    pub fn analyze(&self, catalog: &[DeviceRecord]) -> Option<ComparisonAnalysis> {
        analysis::analyze(self, catalog)
    }

    /// Score the catalog and compute the sorted index order for a key.
    ///
    /// The sort is stable and descending, so ties keep input order.
    pub(crate) fn score_and_order(
        &self,
        catalog: &[DeviceRecord],
        key: SortKey,
    ) -> (Vec<DeviceScore>, Vec<usize>) {
        let scores = score_catalog(catalog, &self.weights);
        let metrics: Vec<f64> = catalog
            .iter()
            .zip(&scores)
            .map(|(device, score)| self.sort_metric(device, score, key))
            .collect();

        let mut order: Vec<usize> = (0..catalog.len()).collect();
        order.sort_by(|&a, &b| metrics[b].total_cmp(&metrics[a]));
        (scores, order)
    }

    /// Numeric sort metric for one device under a key; higher sorts first
    fn sort_metric(&self, device: &DeviceRecord, score: &DeviceScore, key: SortKey) -> f64 {
        match key {
            SortKey::Overall => f64::from(score.overall),
            SortKey::Trend => self.trend_momentum(device),
            SortKey::Value => value_metric(device),
            SortKey::Popularity => device.view_count.unwrap_or(0) as f64,
            SortKey::Recency => device
                .release_date
                .map_or(f64::NEG_INFINITY, |date| f64::from(date.num_days_from_ce())),
        }
    }

    /// Trend momentum: views per day since release.
    ///
    /// Devices without a release date are assumed 30 days old so that a
    /// missing date does not masquerade as a day-one viral launch; devices
    /// without view data have no momentum.
    #[must_use]
    pub fn trend_momentum(&self, device: &DeviceRecord) -> f64 {
        let views = match device.view_count {
            Some(views) => views as f64,
            None => return 0.0,
        };
        let age_days = device
            .release_date
            .map_or(DEFAULT_AGE_DAYS, |released| {
                (self.reference_date - released).num_days()
            })
            .max(1);
        views / age_days as f64
    }
}

/// Rating-to-price ratio; devices missing either signal have zero value
fn value_metric(device: &DeviceRecord) -> f64 {
    match (device.rating, device.effective_price()) {
        (Some(rating), Some(price)) => rating / price,
        _ => 0.0,
    }
}
