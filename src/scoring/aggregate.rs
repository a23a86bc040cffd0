//! Weighted aggregation of category scores into per-device results.

use crate::model::{Category, CategoryScores, DeviceRecord, DeviceScore, WeightVector};
use crate::scoring::categories::score_categories;
use rayon::prelude::*;

/// Categories at or above this score are strengths
const STRENGTH_THRESHOLD: f64 = 80.0;
/// Categories at or below this score are weaknesses
const WEAKNESS_THRESHOLD: f64 = 40.0;
/// At most this many strengths are reported
const MAX_STRENGTHS: usize = 3;
/// At most this many weaknesses are reported
const MAX_WEAKNESSES: usize = 2;

/// Combine category scores into one overall score using caller weights.
///
/// The result is the weighted mean rounded to the nearest integer. An
/// all-zero weight vector is defined to produce 0 - degenerate but
/// well-defined, never a division by zero or NaN.
#[must_use]
pub fn aggregate_overall(scores: &CategoryScores, weights: &WeightVector) -> u32 {
    let total = weights.total();
    if !(total > 0.0) {
        return 0;
    }
    let weighted: f64 = scores
        .as_array()
        .iter()
        .zip(weights.as_array())
        .map(|(score, weight)| score * weight)
        .sum();
    (weighted / total).clamp(0.0, 100.0).round() as u32
}

/// Categories scoring at or above 80, in canonical order, at most three
#[must_use]
pub fn classify_strengths(scores: &CategoryScores) -> Vec<Category> {
    scores
        .iter()
        .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
        .map(|(category, _)| category)
        .take(MAX_STRENGTHS)
        .collect()
}

/// Categories scoring at or below 40, in canonical order, at most two
#[must_use]
pub fn classify_weaknesses(scores: &CategoryScores) -> Vec<Category> {
    scores
        .iter()
        .filter(|(_, score)| *score <= WEAKNESS_THRESHOLD)
        .map(|(category, _)| category)
        .take(MAX_WEAKNESSES)
        .collect()
}

/// Score one device against its candidate set.
///
/// The returned [`DeviceScore`] is unranked (`rank == 0`); ranks are
/// assigned by the ranking engine after sorting.
#[must_use]
pub fn score_device(
    device: &DeviceRecord,
    catalog: &[DeviceRecord],
    weights: &WeightVector,
) -> DeviceScore {
    let categories = score_categories(device, catalog);
    DeviceScore {
        device_id: device.id.clone(),
        device_name: device.name.clone(),
        overall: aggregate_overall(&categories, weights),
        strengths: classify_strengths(&categories),
        weaknesses: classify_weaknesses(&categories),
        categories,
        rank: 0,
    }
}

/// Score a whole catalog, preserving input order.
///
/// Devices are scored in parallel; each score is a pure function of the
/// device and the candidate set, so the parallel split has no ordering or
/// aliasing hazards.
#[must_use]
pub fn score_catalog(catalog: &[DeviceRecord], weights: &WeightVector) -> Vec<DeviceScore> {
    catalog
        .par_iter()
        .map(|device| score_device(device, catalog, weights))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Money;

    fn scores(values: [f64; 7]) -> CategoryScores {
        CategoryScores {
            price: values[0],
            performance: values[1],
            battery: values[2],
            camera: values[3],
            display: values[4],
            design: values[5],
            features: values[6],
        }
    }

    #[test]
    fn test_aggregate_uniform_weights_is_mean() {
        let scores = scores([70.0; 7]);
        assert_eq!(aggregate_overall(&scores, &WeightVector::default()), 70);
    }

    #[test]
    fn test_aggregate_zero_weights_is_zero() {
        let scores = scores([90.0; 7]);
        assert_eq!(aggregate_overall(&scores, &WeightVector::uniform(0.0)), 0);
    }

    #[test]
    fn test_aggregate_skewed_weights() {
        let mut weights = WeightVector::uniform(0.0);
        weights.camera = 2.0;
        weights.battery = 1.0;
        let scores = scores([0.0, 0.0, 60.0, 90.0, 0.0, 0.0, 0.0]);
        // (90*2 + 60*1) / 3 = 80
        assert_eq!(aggregate_overall(&scores, &weights), 80);
    }

    #[test]
    fn test_aggregate_rounds_to_nearest() {
        let mut weights = WeightVector::uniform(0.0);
        weights.price = 1.0;
        weights.camera = 1.0;
        let scores = scores([70.0, 0.0, 0.0, 75.0, 0.0, 0.0, 0.0]);
        // 72.5 rounds half up
        assert_eq!(aggregate_overall(&scores, &weights), 73);
    }

    #[test]
    fn test_strengths_cap_and_order() {
        let scores = scores([85.0, 90.0, 95.0, 100.0, 80.0, 10.0, 20.0]);
        let strengths = classify_strengths(&scores);
        assert_eq!(
            strengths,
            vec![Category::Price, Category::Performance, Category::Battery]
        );

        let weaknesses = classify_weaknesses(&scores);
        assert_eq!(weaknesses, vec![Category::Design, Category::Features]);
    }

    #[test]
    fn test_neutral_categories_unlisted() {
        let scores = scores([50.0, 60.0, 70.0, 79.9, 41.0, 75.0, 55.0]);
        assert!(classify_strengths(&scores).is_empty());
        assert!(classify_weaknesses(&scores).is_empty());
    }

    #[test]
    fn test_threshold_boundaries_inclusive() {
        let scores = scores([80.0, 40.0, 50.0, 50.0, 50.0, 50.0, 50.0]);
        assert_eq!(classify_strengths(&scores), vec![Category::Price]);
        assert_eq!(classify_weaknesses(&scores), vec![Category::Performance]);
    }

    #[test]
    fn test_score_catalog_preserves_input_order() {
        let mut a = DeviceRecord::new("a", "A");
        a.current_price = Some(Money::usd(300.0));
        let mut b = DeviceRecord::new("b", "B");
        b.current_price = Some(Money::usd(600.0));
        let catalog = vec![a, b];

        let scored = score_catalog(&catalog, &WeightVector::default());
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].device_id, "a");
        assert_eq!(scored[1].device_id, "b");
        assert!(scored.iter().all(|s| s.rank == 0));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut device = DeviceRecord::new("d", "D");
        device.current_price = Some(Money::usd(450.0));
        let catalog = vec![device.clone(), DeviceRecord::new("e", "E")];
        let weights = WeightVector::default();

        let first = score_device(&device, &catalog, &weights);
        let second = score_device(&device, &catalog, &weights);
        assert_eq!(first, second);
    }
}
