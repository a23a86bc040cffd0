//! Integration tests for devrank
//!
//! These tests verify end-to-end functionality of catalog parsing, the
//! scoring engine, ranking, and report generation.

use devrank::{
    catalog::parse_catalog,
    model::{Category, WeightVector},
    ranking::{RankingEngine, SortKey},
    reports::{create_reporter, ReportContext, ReportFormat},
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn engine() -> RankingEngine {
    RankingEngine::new(WeightVector::default())
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;

    #[test]
    fn test_parse_phones_fixture() {
        let catalog = parse_catalog(&fixture_path("phones.json")).expect("Failed to parse catalog");

        assert_eq!(catalog.len(), 4);
        assert!(catalog.iter().any(|d| d.name == "Ultra X"));
        assert!(catalog.iter().any(|d| d.name == "Budget Five"));

        let ultra = catalog.iter().find(|d| d.id == "ultra-x").unwrap();
        // Current price wins over launch price
        assert_eq!(ultra.effective_price(), Some(1099.0));
        assert_eq!(ultra.specifications.len(), 11);
        assert!(ultra.release_date.is_some());
    }

    #[test]
    fn test_parse_bare_array_fixture() {
        let catalog = parse_catalog(&fixture_path("minimal.json")).expect("Failed to parse");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].id, "a1");
    }

    #[test]
    fn test_sparse_record_defaults() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let mystery = catalog.iter().find(|d| d.id == "mystery-m").unwrap();
        assert!(mystery.effective_price().is_none());
        assert!(mystery.specifications.is_empty());
        assert!(mystery.rating.is_none());
    }
}

// ============================================================================
// Scoring & Ranking Tests
// ============================================================================

mod ranking_tests {
    use super::*;

    #[test]
    fn test_ranks_are_contiguous_over_fixture() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank(&catalog);
        let ranks: Vec<usize> = ranked.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_all_scores_in_bounds_over_fixture() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        for score in engine().rank(&catalog) {
            assert!(score.overall <= 100);
            for (_, value) in score.categories.iter() {
                assert!((0.0..=100.0).contains(&value), "out of bounds: {value}");
            }
        }
    }

    #[test]
    fn test_flagship_is_strong_in_camera_and_display() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank(&catalog);
        let ultra = ranked.iter().find(|s| s.device_id == "ultra-x").unwrap();
        assert!(ultra.categories.camera >= 80.0);
        assert!(ultra.categories.display >= 80.0);
        assert!(!ultra.strengths.is_empty());
    }

    #[test]
    fn test_sparse_device_gets_neutral_scores() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank(&catalog);
        let mystery = ranked.iter().find(|s| s.device_id == "mystery-m").unwrap();
        assert_eq!(mystery.categories.performance, 50.0);
        assert_eq!(mystery.categories.battery, 50.0);
        assert_eq!(mystery.categories.camera, 50.0);
        assert_eq!(mystery.categories.display, 50.0);
        assert_eq!(mystery.categories.design, 60.0);
        assert_eq!(mystery.categories.features, 0.0);
        // Unpriced against priced competitors
        assert_eq!(mystery.categories.price, 0.0);
    }

    #[test]
    fn test_popularity_sort_uses_view_counts() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank_by(&catalog, SortKey::Popularity);
        assert_eq!(ranked[0].device_id, "budget-5");
        assert_eq!(ranked[1].device_id, "ultra-x");
    }

    #[test]
    fn test_recency_sort_newest_first() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank_by(&catalog, SortKey::Recency);
        assert_eq!(ranked[0].device_id, "shooter-pro");
        // The undated device sorts last
        assert_eq!(ranked[3].device_id, "mystery-m");
    }
}

// ============================================================================
// Analysis Tests
// ============================================================================

mod analysis_tests {
    use super::*;

    #[test]
    fn test_analysis_over_fixture() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let analysis = engine().analyze(&catalog).expect("non-empty catalog");

        assert_eq!(analysis.winner.rank, 1);
        assert_eq!(analysis.category_winners.len(), 7);
        assert_eq!(
            analysis.category_winners[&Category::Battery].device_id,
            "budget-5"
        );
        // Photography pick is the camera category winner
        assert_eq!(
            analysis.recommendations.photography.device_id,
            analysis.category_winners[&Category::Camera].device_id
        );
        assert!(!analysis.summary.is_empty());
    }

    #[test]
    fn test_best_value_fallback_without_prices() {
        let catalog = parse_catalog(&fixture_path("unpriced.json")).unwrap();
        let analysis = engine().analyze(&catalog).expect("non-empty catalog");
        assert_eq!(analysis.best_value, analysis.winner);
        assert_eq!(analysis.recommendations.budget, analysis.winner);
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    fn context() -> ReportContext {
        ReportContext {
            title: "phones.json".to_string(),
            sort_key: SortKey::Overall,
        }
    }

    #[test]
    fn test_every_format_renders_fixture() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank(&catalog);
        let analysis = engine().analyze(&catalog).unwrap();

        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
            ReportFormat::Csv,
        ] {
            let reporter = create_reporter(format, false);
            let ranking_report = reporter
                .generate_ranking_report(&ranked, &context())
                .unwrap_or_else(|e| panic!("{format} ranking report failed: {e}"));
            assert!(!ranking_report.is_empty());

            let analysis_report = reporter
                .generate_analysis_report(&analysis, &ranked, &context())
                .unwrap_or_else(|e| panic!("{format} analysis report failed: {e}"));
            assert!(!analysis_report.is_empty());
        }
    }

    #[test]
    fn test_json_report_round_trips() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank(&catalog);
        let report = create_reporter(ReportFormat::Json, false)
            .generate_ranking_report(&ranked, &context())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["device_count"], 4);
        assert_eq!(value["ranking"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_csv_report_has_one_row_per_device() {
        let catalog = parse_catalog(&fixture_path("phones.json")).unwrap();
        let ranked = engine().rank(&catalog);
        let report = create_reporter(ReportFormat::Csv, false)
            .generate_ranking_report(&ranked, &context())
            .unwrap();
        // Header plus one row per device
        assert_eq!(report.lines().count(), 5);
    }
}
