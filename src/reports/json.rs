//! JSON report generation.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::model::DeviceScore;
use crate::ranking::ComparisonAnalysis;
use serde_json::json;

/// Structured JSON output with a versioned envelope
#[derive(Debug, Clone, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn to_pretty(value: &serde_json::Value) -> Result<String, ReportError> {
    serde_json::to_string_pretty(value).map_err(|e| ReportError::SerializationError(e.to_string()))
}

impl ReportGenerator for JsonReporter {
    fn generate_ranking_report(
        &self,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let output = json!({
            "tool": "devrank",
            "version": env!("CARGO_PKG_VERSION"),
            "catalog": context.title,
            "sort": context.sort_key.to_string(),
            "device_count": ranking.len(),
            "ranking": ranking,
        });
        to_pretty(&output)
    }

    fn generate_analysis_report(
        &self,
        analysis: &ComparisonAnalysis,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let output = json!({
            "tool": "devrank",
            "version": env!("CARGO_PKG_VERSION"),
            "catalog": context.title,
            "device_count": ranking.len(),
            "ranking": ranking,
            "analysis": analysis,
        });
        to_pretty(&output)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
