//! Compare command handler.
//!
//! Implements the `compare` subcommand: cross-device analysis (winner, best
//! value, category winners, recommendations) over a catalog or a selected
//! subset of it.

use crate::cli::rank::catalog_title;
use crate::model::{DeviceRecord, WeightVector};
use crate::pipeline::{
    auto_detect_format, exit_codes, load_catalog_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::ranking::{RankingEngine, SortKey};
use crate::reports::{create_reporter, ReportContext, ReportFormat};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Compare command configuration
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub catalog_path: PathBuf,
    /// Device ids to compare; empty means the whole catalog
    pub device_ids: Vec<String>,
    pub weights: WeightVector,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the compare command, returning the desired exit code.
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let catalog = load_catalog_with_context(&config.catalog_path)?;
    let selected = select_devices(catalog, &config.device_ids)?;

    let engine = RankingEngine::new(config.weights);
    let target = OutputTarget::from_option(config.output_file.clone());
    let format = auto_detect_format(config.output, &target);

    let Some(analysis) = engine.analyze(&selected) else {
        write_output("No devices to compare.", &target, config.quiet)?;
        return Ok(exit_codes::SUCCESS);
    };
    let ranked = engine.rank(&selected);

    let reporter = create_reporter(format, should_use_color(config.no_color));
    let context = ReportContext {
        title: catalog_title(&config.catalog_path),
        sort_key: SortKey::Overall,
    };
    let report = reporter.generate_analysis_report(&analysis, &ranked, &context)?;
    write_output(&report, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Narrow the catalog to the requested ids, preserving catalog order.
///
/// An unknown id is a hard error - silently comparing a subset the caller
/// did not ask for would be misleading.
fn select_devices(
    catalog: Vec<DeviceRecord>,
    device_ids: &[String],
) -> Result<Vec<DeviceRecord>> {
    if device_ids.is_empty() {
        return Ok(catalog);
    }

    for id in device_ids {
        if !catalog.iter().any(|device| &device.id == id) {
            bail!("Device id not found in catalog: {id}");
        }
    }

    Ok(catalog
        .into_iter()
        .filter(|device| device_ids.contains(&device.id))
        .collect())
}
