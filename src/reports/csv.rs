//! CSV report generation for spreadsheet import.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::model::{Category, DeviceScore};
use crate::ranking::ComparisonAnalysis;
use std::fmt::Write as _;

/// Flat CSV rows, one device per line
#[derive(Debug, Clone, Default)]
pub struct CsvReporter;

impl CsvReporter {
    /// Create a CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_rows(ranking: &[DeviceScore]) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "rank,device_id,device_name,overall,grade,price,performance,battery,camera,display,design,features,strengths,weaknesses"
        )?;
        for score in ranking {
            let strengths: Vec<&str> = score.strengths.iter().map(Category::name).collect();
            let weaknesses: Vec<&str> = score.weaknesses.iter().map(Category::name).collect();
            writeln!(
                out,
                "{},{},{},{},{},{:.1},{:.1},{:.1},{:.1},{:.1},{:.1},{:.1},{},{}",
                score.rank,
                escape_field(&score.device_id),
                escape_field(&score.device_name),
                score.overall,
                score.grade().letter(),
                score.categories.price,
                score.categories.performance,
                score.categories.battery,
                score.categories.camera,
                score.categories.display,
                score.categories.design,
                score.categories.features,
                escape_field(&strengths.join("; ")),
                escape_field(&weaknesses.join("; ")),
            )?;
        }
        Ok(out)
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_ranking_report(
        &self,
        ranking: &[DeviceScore],
        _context: &ReportContext,
    ) -> Result<String, ReportError> {
        Ok(Self::render_rows(ranking)?)
    }

    /// CSV carries only the flat ranked rows; analysis structure does not
    /// flatten usefully into a spreadsheet
    fn generate_analysis_report(
        &self,
        _analysis: &ComparisonAnalysis,
        ranking: &[DeviceScore],
        _context: &ReportContext,
    ) -> Result<String, ReportError> {
        Ok(Self::render_rows(ranking)?)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}
