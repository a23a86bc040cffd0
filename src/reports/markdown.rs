//! Markdown report generation.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::model::{Category, DeviceScore};
use crate::ranking::ComparisonAnalysis;
use std::fmt::Write as _;

/// Human-readable Markdown tables
#[derive(Debug, Clone, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_ranking_table(
        out: &mut String,
        ranking: &[DeviceScore],
    ) -> Result<(), std::fmt::Error> {
        writeln!(
            out,
            "| Rank | Device | Overall | Grade | Strengths | Weaknesses |"
        )?;
        writeln!(out, "|------|--------|---------|-------|-----------|------------|")?;
        for score in ranking {
            let strengths: Vec<&str> = score.strengths.iter().map(Category::name).collect();
            let weaknesses: Vec<&str> = score.weaknesses.iter().map(Category::name).collect();
            writeln!(
                out,
                "| {} | {} | {}/100 | {} | {} | {} |",
                score.rank,
                escape(&score.device_name),
                score.overall,
                score.grade().letter(),
                strengths.join(", "),
                weaknesses.join(", "),
            )?;
        }
        Ok(())
    }
}

/// Escape characters that would break Markdown table cells
fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

impl ReportGenerator for MarkdownReporter {
    fn generate_ranking_report(
        &self,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# Device Ranking: {}", escape(&context.title))?;
        writeln!(out)?;
        writeln!(
            out,
            "{} devices, sorted by {}.",
            ranking.len(),
            context.sort_key
        )?;
        writeln!(out)?;
        Self::write_ranking_table(&mut out, ranking)?;
        Ok(out)
    }

    fn generate_analysis_report(
        &self,
        analysis: &ComparisonAnalysis,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# Device Comparison: {}", escape(&context.title))?;
        writeln!(out)?;
        writeln!(out, "{}", escape(&analysis.summary))?;
        writeln!(out)?;

        writeln!(out, "## Ranking")?;
        writeln!(out)?;
        Self::write_ranking_table(&mut out, ranking)?;
        writeln!(out)?;

        writeln!(out, "## Category winners")?;
        writeln!(out)?;
        writeln!(out, "| Category | Winner | Score |")?;
        writeln!(out, "|----------|--------|-------|")?;
        for (category, winner) in &analysis.category_winners {
            writeln!(
                out,
                "| {} | {} | {:.0}/100 |",
                category.name(),
                escape(&winner.device_name),
                winner.categories.get(*category)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Recommendations")?;
        writeln!(out)?;
        let picks = &analysis.recommendations;
        writeln!(out, "- **Gaming**: {}", escape(&picks.gaming.device_name))?;
        writeln!(
            out,
            "- **Photography**: {}",
            escape(&picks.photography.device_name)
        )?;
        writeln!(out, "- **Battery**: {}", escape(&picks.battery.device_name))?;
        writeln!(
            out,
            "- **Budget**: {} ({}/100 at the best score-per-price)",
            escape(&picks.budget.device_name),
            picks.budget.overall
        )?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeviceRecord, Money, WeightVector};
    use crate::ranking::{RankingEngine, SortKey};

    fn context() -> ReportContext {
        ReportContext {
            title: "phones.json".to_string(),
            sort_key: SortKey::Overall,
        }
    }

    #[test]
    fn test_ranking_table_shape() {
        let mut a = DeviceRecord::new("a", "Phone A");
        a.current_price = Some(Money::usd(300.0));
        let catalog = vec![a];
        let engine = RankingEngine::new(WeightVector::default());
        let report = MarkdownReporter::new()
            .generate_ranking_report(&engine.rank(&catalog), &context())
            .unwrap();
        assert!(report.contains("| Rank | Device |"));
        assert!(report.contains("| 1 | Phone A |"));
    }

    #[test]
    fn test_pipe_in_device_name_is_escaped() {
        let catalog = vec![DeviceRecord::new("odd", "Odd|Name")];
        let engine = RankingEngine::new(WeightVector::default());
        let report = MarkdownReporter::new()
            .generate_ranking_report(&engine.rank(&catalog), &context())
            .unwrap();
        assert!(report.contains("Odd\\|Name"));
    }

    #[test]
    fn test_analysis_report_has_sections() {
        let catalog = vec![
            DeviceRecord::new("a", "Phone A"),
            DeviceRecord::new("b", "Phone B"),
        ];
        let engine = RankingEngine::new(WeightVector::default());
        let analysis = engine.analyze(&catalog).unwrap();
        let report = MarkdownReporter::new()
            .generate_analysis_report(&analysis, &engine.rank(&catalog), &context())
            .unwrap();
        assert!(report.contains("## Category winners"));
        assert!(report.contains("## Recommendations"));
        assert!(report.contains("**Gaming**"));
    }
}
