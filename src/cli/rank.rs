//! Rank command handler.
//!
//! Implements the `rank` subcommand: load a catalog, score it under the
//! effective weights, sort by the chosen key, and report.

use crate::model::{DeviceRecord, WeightVector};
use crate::pipeline::{
    auto_detect_format, exit_codes, load_catalog_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::ranking::{RankingEngine, SortKey};
use crate::reports::{create_reporter, ReportContext, ReportFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Rank command configuration
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub catalog_path: PathBuf,
    pub weights: WeightVector,
    pub sort_key: SortKey,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    /// Keep only the top N ranked devices in the report
    pub limit: Option<usize>,
    /// Drop devices priced above this cap before ranking (unpriced kept)
    pub max_price: Option<f64>,
    /// Drop devices rated below this floor before ranking (unrated dropped)
    pub min_rating: Option<f64>,
    /// Exit 1 when the top overall score is below this threshold
    pub min_score: Option<u32>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the rank command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_rank(config: RankConfig) -> Result<i32> {
    let devices = load_catalog_with_context(&config.catalog_path)?;
    let devices = apply_filters(devices, config.max_price, config.min_rating);

    tracing::debug!(
        device_count = devices.len(),
        sort_key = %config.sort_key,
        "Ranking catalog"
    );

    let engine = RankingEngine::new(config.weights);
    let mut ranked = engine.rank_by(&devices, config.sort_key);
    if let Some(limit) = config.limit {
        ranked.truncate(limit);
    }

    let target = OutputTarget::from_option(config.output_file.clone());
    let format = auto_detect_format(config.output, &target);
    let reporter = create_reporter(format, should_use_color(config.no_color));
    let context = ReportContext {
        title: catalog_title(&config.catalog_path),
        sort_key: config.sort_key,
    };
    let report = reporter.generate_ranking_report(&ranked, &context)?;
    write_output(&report, &target, config.quiet)?;

    if let Some(threshold) = config.min_score {
        let top = ranked.first().map_or(0, |score| score.overall);
        if top < threshold {
            tracing::error!("Top score {top} is below minimum threshold {threshold}");
            return Ok(exit_codes::THRESHOLD_NOT_MET);
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Pre-ranking catalog filters.
///
/// The price cap keeps unpriced devices (no signal is not a violation); the
/// rating floor drops unrated devices (a floor request implies the caller
/// wants rated hardware only).
fn apply_filters(
    devices: Vec<DeviceRecord>,
    max_price: Option<f64>,
    min_rating: Option<f64>,
) -> Vec<DeviceRecord> {
    devices
        .into_iter()
        .filter(|device| match (max_price, device.effective_price()) {
            (Some(cap), Some(price)) => price <= cap,
            _ => true,
        })
        .filter(|device| match min_rating {
            Some(floor) => device.rating.is_some_and(|rating| rating >= floor),
            None => true,
        })
        .collect()
}

/// Catalog label for report headers: the file name when available
pub(crate) fn catalog_title(path: &std::path::Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
