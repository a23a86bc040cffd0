//! Score command handler.
//!
//! Implements the `score` subcommand: the full category breakdown for a
//! single device, scored relative to the rest of its catalog.

use crate::cli::rank::catalog_title;
use crate::model::{DeviceScore, WeightVector};
use crate::pipeline::{
    auto_detect_format, exit_codes, load_catalog_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::ranking::RankingEngine;
use crate::reports::ReportFormat;
use anyhow::{bail, Result};
use serde_json::json;
use std::path::PathBuf;

/// Score command configuration
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub catalog_path: PathBuf,
    pub device_id: String,
    pub weights: WeightVector,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the score command, returning the desired exit code.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let catalog = load_catalog_with_context(&config.catalog_path)?;

    let engine = RankingEngine::new(config.weights);
    let ranked = engine.rank(&catalog);
    let Some(score) = ranked.iter().find(|s| s.device_id == config.device_id) else {
        bail!(
            "Device id not found in catalog: {} (catalog holds {} devices)",
            config.device_id,
            catalog.len()
        );
    };

    let target = OutputTarget::from_option(config.output_file.clone());
    let output_text = match auto_detect_format(config.output, &target) {
        ReportFormat::Json => format_score_json(score, &config, ranked.len()),
        _ => format_score_breakdown(score, &config, ranked.len()),
    };
    write_output(&output_text, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Format a single-device breakdown as JSON
fn format_score_json(score: &DeviceScore, config: &ScoreConfig, catalog_size: usize) -> String {
    let output = json!({
        "tool": "devrank",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": catalog_title(&config.catalog_path),
        "catalog_size": catalog_size,
        "score": score,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

/// Format a single-device breakdown for terminal output
fn format_score_breakdown(score: &DeviceScore, config: &ScoreConfig, catalog_size: usize) -> String {
    let use_color = should_use_color(config.no_color);
    let (color, reset) = if use_color {
        let color = match score.grade() {
            crate::model::Grade::A | crate::model::Grade::B => "\x1b[32m",
            crate::model::Grade::C | crate::model::Grade::D => "\x1b[33m",
            crate::model::Grade::F => "\x1b[31m",
        };
        (color, "\x1b[0m")
    } else {
        ("", "")
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "Score Breakdown: {} ({})",
        score.device_name,
        catalog_title(&config.catalog_path)
    ));
    lines.push(String::new());
    lines.push(format!(
        "Overall: {}{}/100 (Grade: {}){}  -  rank {} of {}",
        color,
        score.overall,
        score.grade().letter(),
        reset,
        score.rank,
        catalog_size
    ));
    lines.push(String::new());

    lines.push("Category Scores:".to_string());
    for (category, value) in score.categories.iter() {
        let marker = if score.strengths.contains(&category) {
            "  [strength]"
        } else if score.weaknesses.contains(&category) {
            "  [weakness]"
        } else {
            ""
        };
        lines.push(format!("  {:<12} {value:>5.1}/100{marker}", category.name()));
    }

    lines.join("\n")
}
