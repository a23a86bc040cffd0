//! Report generation for ranking results.
//!
//! This module provides multiple output formats for rankings and
//! comparison analyses:
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//! - Summary: Compact shell-friendly output
//! - CSV: Spreadsheet import

mod csv;
mod json;
mod markdown;
mod summary;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;

use crate::model::DeviceScore;
use crate::ranking::{ComparisonAnalysis, SortKey};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect (resolves to summary)
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    Markdown,
    /// Brief summary output
    Summary,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Shared metadata handed to every reporter
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Catalog label, usually the input file name
    pub title: String,
    /// Sort key the ranking was produced under
    pub sort_key: SortKey,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a ranked catalog
    fn generate_ranking_report(
        &self,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError>;

    /// Generate a report for a cross-device analysis
    fn generate_analysis_report(
        &self,
        analysis: &ComparisonAnalysis,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format with color control
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}
