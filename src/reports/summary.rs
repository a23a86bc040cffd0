//! Compact shell-friendly summary output.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DeviceScore, Grade};
use crate::ranking::ComparisonAnalysis;

/// Human-readable terminal summary, optionally colored
#[derive(Debug, Clone, Default)]
pub struct SummaryReporter {
    use_color: bool,
}

impl SummaryReporter {
    /// Create a colored summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { use_color: true }
    }

    /// Disable ANSI colors
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    fn grade_color(&self, grade: Grade) -> (&'static str, &'static str) {
        if !self.use_color {
            return ("", "");
        }
        let color = match grade {
            Grade::A | Grade::B => "\x1b[32m", // Green
            Grade::C | Grade::D => "\x1b[33m", // Yellow
            Grade::F => "\x1b[31m",            // Red
        };
        (color, "\x1b[0m")
    }

    fn push_ranking_lines(&self, lines: &mut Vec<String>, ranking: &[DeviceScore]) {
        for score in ranking {
            let (color, reset) = self.grade_color(score.grade());
            let strengths = if score.strengths.is_empty() {
                String::new()
            } else {
                let names: Vec<&str> = score.strengths.iter().map(|c| c.name()).collect();
                format!("  [+{}]", names.join(", +"))
            };
            lines.push(format!(
                "  {:>3}. {:<28} {}{:>3}/100 ({}){}{}",
                score.rank,
                score.device_name,
                color,
                score.overall,
                score.grade().letter(),
                reset,
                strengths
            ));
        }
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_ranking_report(
        &self,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(format!(
            "Device Ranking: {} ({} devices, sorted by {})",
            context.title,
            ranking.len(),
            context.sort_key
        ));
        lines.push(String::new());

        if ranking.is_empty() {
            lines.push("  (catalog is empty)".to_string());
        } else {
            self.push_ranking_lines(&mut lines, ranking);
        }

        Ok(lines.join("\n"))
    }

    fn generate_analysis_report(
        &self,
        analysis: &ComparisonAnalysis,
        ranking: &[DeviceScore],
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(format!("Device Comparison: {}", context.title));
        lines.push(String::new());
        lines.push(analysis.summary.clone());
        lines.push(String::new());

        self.push_ranking_lines(&mut lines, ranking);
        lines.push(String::new());

        lines.push(format!(
            "Best value: {} ({}/100)",
            analysis.best_value.device_name, analysis.best_value.overall
        ));
        lines.push(String::new());

        lines.push("Category winners:".to_string());
        for (category, winner) in &analysis.category_winners {
            lines.push(format!(
                "  {:<12} {} ({:.0}/100)",
                category.name(),
                winner.device_name,
                winner.categories.get(*category)
            ));
        }
        lines.push(String::new());

        lines.push("Recommendations:".to_string());
        let picks = &analysis.recommendations;
        lines.push(format!("  Gaming       {}", picks.gaming.device_name));
        lines.push(format!("  Photography  {}", picks.photography.device_name));
        lines.push(format!("  Battery      {}", picks.battery.device_name));
        lines.push(format!("  Budget       {}", picks.budget.device_name));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
