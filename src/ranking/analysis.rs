//! Cross-device comparison analysis.
//!
//! Derived read-only aggregate over a scored catalog: outright winner, best
//! value pick, per-category winners, use-case recommendations, and a short
//! generated summary. Produced on demand by [`RankingEngine::analyze`].

use crate::model::{Category, DeviceRecord, DeviceScore};
use crate::ranking::{RankingEngine, SortKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scale applied to the score-per-currency-unit ratio for best-value
/// comparison. Purely cosmetic - it does not change the argmax.
const VALUE_PER_PRICE_SCALE: f64 = 100.0;

/// Winners scoring within this many points of the runner-up are a "narrow"
/// win; anything larger is "clear".
const NARROW_MARGIN_POINTS: u32 = 5;

/// Per-use-case recommendation picks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCasePicks {
    /// Best combined performance + display score
    pub gaming: DeviceScore,
    /// Camera category winner
    pub photography: DeviceScore,
    /// Battery category winner
    pub battery: DeviceScore,
    /// Best-value pick
    pub budget: DeviceScore,
}

/// Derived analysis over a scored device collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ComparisonAnalysis {
    /// The device at rank 1 under the overall-score sort
    pub winner: DeviceScore,
    /// Highest overall-score-per-currency-unit among priced devices; falls
    /// back to the winner when no device has a known price
    pub best_value: DeviceScore,
    /// Top device per category, in canonical category order
    pub category_winners: IndexMap<Category, DeviceScore>,
    /// Use-case recommendations
    pub recommendations: UseCasePicks,
    /// Generated one-sentence summary of the outcome
    pub summary: String,
}

/// Compute the analysis for a catalog; `None` when the catalog is empty.
pub(crate) fn analyze(
    engine: &RankingEngine,
    catalog: &[DeviceRecord],
) -> Option<ComparisonAnalysis> {
    if catalog.is_empty() {
        return None;
    }

    // Scores stay in input order so tie-breaks fall to the earlier device;
    // ranks are written back through the sorted index order.
    let (mut scores, order) = engine.score_and_order(catalog, SortKey::Overall);
    for (position, &index) in order.iter().enumerate() {
        scores[index].rank = position + 1;
    }

    let winner = scores[order[0]].clone();
    let runner_up = order.get(1).map(|&index| &scores[index]);
    let summary = render_summary(&winner, runner_up);

    let best_value = best_value_pick(catalog, &scores).unwrap_or_else(|| winner.clone());

    let mut category_winners = IndexMap::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        if let Some(top) = max_by_metric(&scores, |score| score.categories.get(category)) {
            category_winners.insert(category, top.clone());
        }
    }

    let gaming = max_by_metric(&scores, |score| {
        score.categories.performance + score.categories.display
    })
    .expect("non-empty catalog has a gaming pick")
    .clone();

    let recommendations = UseCasePicks {
        gaming,
        photography: category_winners[&Category::Camera].clone(),
        battery: category_winners[&Category::Battery].clone(),
        budget: best_value.clone(),
    };

    Some(ComparisonAnalysis {
        winner,
        best_value,
        category_winners,
        recommendations,
        summary,
    })
}

/// First element maximizing the metric; ties keep the earlier element
fn max_by_metric<F>(scores: &[DeviceScore], metric: F) -> Option<&DeviceScore>
where
    F: Fn(&DeviceScore) -> f64,
{
    let mut top: Option<(&DeviceScore, f64)> = None;
    for score in scores {
        let value = metric(score);
        if top.is_none_or(|(_, best)| value > best) {
            top = Some((score, value));
        }
    }
    top.map(|(score, _)| score)
}

/// Best score-per-currency-unit among devices with a known price
fn best_value_pick(catalog: &[DeviceRecord], scores: &[DeviceScore]) -> Option<DeviceScore> {
    let mut best: Option<(&DeviceScore, f64)> = None;
    for (device, score) in catalog.iter().zip(scores) {
        let Some(price) = device.effective_price() else {
            continue;
        };
        let value = f64::from(score.overall) / price * VALUE_PER_PRICE_SCALE;
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((score, value));
        }
    }
    best.map(|(score, _)| score.clone())
}

/// One-sentence outcome summary naming the winner and the margin
fn render_summary(winner: &DeviceScore, runner_up: Option<&DeviceScore>) -> String {
    match runner_up {
        None => format!(
            "{} leads with an overall score of {}/100.",
            winner.device_name, winner.overall
        ),
        Some(runner_up) => {
            let gap = winner.overall.saturating_sub(runner_up.overall);
            let margin = if gap <= NARROW_MARGIN_POINTS {
                "narrow"
            } else {
                "clear"
            };
            format!(
                "{} wins with an overall score of {}/100, a {} {}-point lead over {}.",
                winner.device_name, winner.overall, margin, gap, runner_up.device_name
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryScores, Money, SpecEntry, WeightVector};

    fn score_named(name: &str, overall: u32) -> DeviceScore {
        DeviceScore {
            device_id: name.to_lowercase(),
            device_name: name.to_string(),
            overall,
            categories: CategoryScores {
                price: 50.0,
                performance: 50.0,
                battery: 50.0,
                camera: 50.0,
                display: 50.0,
                design: 50.0,
                features: 50.0,
            },
            rank: 0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }

    fn engine() -> RankingEngine {
        RankingEngine::new(WeightVector::default())
    }

    #[test]
    fn test_summary_clear_win() {
        let summary = render_summary(&score_named("Alpha", 90), Some(&score_named("Beta", 83)));
        assert!(summary.contains("clear"), "summary: {summary}");
        assert!(summary.contains("7-point"), "summary: {summary}");
        assert!(summary.contains("Alpha"));
        assert!(summary.contains("Beta"));
    }

    #[test]
    fn test_summary_narrow_win() {
        let summary = render_summary(&score_named("Alpha", 90), Some(&score_named("Beta", 88)));
        assert!(summary.contains("narrow"), "summary: {summary}");
        assert!(summary.contains("2-point"), "summary: {summary}");
    }

    #[test]
    fn test_summary_single_device() {
        let summary = render_summary(&score_named("Solo", 77), None);
        assert!(summary.contains("Solo"));
        assert!(summary.contains("77/100"));
    }

    #[test]
    fn test_analyze_empty_catalog() {
        assert!(engine().analyze(&[]).is_none());
    }

    #[test]
    fn test_winner_is_rank_one() {
        let mut cheap = DeviceRecord::new("cheap", "Cheap");
        cheap.current_price = Some(Money::usd(200.0));
        let mut dear = DeviceRecord::new("dear", "Dear");
        dear.current_price = Some(Money::usd(900.0));

        let analysis = engine().analyze(&[dear, cheap]).unwrap();
        assert_eq!(analysis.winner.rank, 1);
        assert_eq!(analysis.winner.device_id, "cheap");
    }

    #[test]
    fn test_best_value_falls_back_to_winner_when_unpriced() {
        let catalog = vec![
            DeviceRecord::new("a", "A"),
            DeviceRecord::new("b", "B"),
        ];
        let analysis = engine().analyze(&catalog).unwrap();
        assert_eq!(analysis.best_value, analysis.winner);
    }

    #[test]
    fn test_best_value_prefers_score_per_unit() {
        // Dear scores higher overall but Cheap has far better score/price
        let mut cheap = DeviceRecord::new("cheap", "Cheap");
        cheap.current_price = Some(Money::usd(150.0));
        let mut dear = DeviceRecord::new("dear", "Dear");
        dear.current_price = Some(Money::usd(950.0));
        dear.specifications = vec![
            SpecEntry::new("", "Battery", "5000mAh"),
            SpecEntry::new("", "Main Camera", "108MP"),
        ];

        let analysis = engine().analyze(&[dear, cheap]).unwrap();
        assert_eq!(analysis.best_value.device_id, "cheap");
        assert_eq!(analysis.recommendations.budget.device_id, "cheap");
    }

    #[test]
    fn test_category_winners_cover_all_categories() {
        let mut a = DeviceRecord::new("a", "A");
        a.specifications = vec![SpecEntry::new("", "Battery", "5000mAh")];
        let mut b = DeviceRecord::new("b", "B");
        b.specifications = vec![SpecEntry::new("", "Main Camera", "108MP")];

        let analysis = engine().analyze(&[a, b]).unwrap();
        assert_eq!(analysis.category_winners.len(), 7);
        assert_eq!(analysis.category_winners[&Category::Battery].device_id, "a");
        assert_eq!(analysis.category_winners[&Category::Camera].device_id, "b");
        // Canonical iteration order is preserved
        let order: Vec<Category> = analysis.category_winners.keys().copied().collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_category_winner_tie_keeps_input_order() {
        let catalog = vec![DeviceRecord::new("first", "First"), DeviceRecord::new("second", "Second")];
        let analysis = engine().analyze(&catalog).unwrap();
        for (_, winner) in &analysis.category_winners {
            assert_eq!(winner.device_id, "first");
        }
    }

    #[test]
    fn test_gaming_pick_maximizes_performance_plus_display() {
        let mut gamer = DeviceRecord::new("gamer", "Gamer");
        gamer.specifications = vec![
            SpecEntry::new("", "Processor", "3.5GHz"),
            SpecEntry::new("", "Refresh Rate", "144Hz"),
        ];
        let mut shooter = DeviceRecord::new("shooter", "Shooter");
        shooter.specifications = vec![SpecEntry::new("", "Main Camera", "200MP")];

        let analysis = engine().analyze(&[shooter, gamer]).unwrap();
        assert_eq!(analysis.recommendations.gaming.device_id, "gamer");
        assert_eq!(analysis.recommendations.photography.device_id, "shooter");
    }
}
