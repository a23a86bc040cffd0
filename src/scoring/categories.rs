//! The seven category scoring functions.
//!
//! Each function is pure and independent: it takes one device (plus, for
//! price, the full candidate set) and returns a score in [0, 100]. Price is
//! set-relative; every other category scores against fixed reference
//! thresholds. Missing data always degrades to a documented default, never
//! to an error.

use crate::model::{CategoryScores, DeviceRecord};
use crate::scoring::extract::SpecExtractor;

/// Neutral score used when a category has no signal at all
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Reference ceiling for CPU clock rate, in GHz
const CPU_CLOCK_CEILING_GHZ: f64 = 3.5;
/// Reference ceiling for benchmark-style processor scores
const BENCHMARK_CEILING: f64 = 1_000_000.0;
/// Parsed processor values above this are benchmark points, not a clock rate
const BENCHMARK_CUTOVER: f64 = 100.0;
/// Reference ceiling for RAM, in GB
const RAM_CEILING_GB: f64 = 16.0;
/// Reference ceiling for the primary camera, in megapixels
const CAMERA_MP_CEILING: f64 = 108.0;
/// Reference ceiling for screen size, in inches
const SCREEN_SIZE_CEILING_IN: f64 = 7.0;

const PROCESSOR_ALIASES: &[&str] = &["processor", "cpu", "chipset", "soc"];
const RAM_ALIASES: &[&str] = &["ram", "memory"];
const STORAGE_ALIASES: &[&str] = &["storage", "disk", "rom"];
const BATTERY_ALIASES: &[&str] = &["battery"];
const CAMERA_ALIASES: &[&str] = &["camera"];
const SCREEN_SIZE_ALIASES: &[&str] = &["size", "inch"];
const RESOLUTION_ALIASES: &[&str] = &["resolution"];
const REFRESH_ALIASES: &[&str] = &["refresh"];
const MATERIAL_ALIASES: &[&str] = &["build", "material", "body", "frame"];
const OIS_ALIASES: &[&str] = &["optical image stabilization", "stabilization", "ois"];
const NIGHT_MODE_ALIASES: &[&str] = &["night"];
const WATER_ALIASES: &[&str] = &["water", "ip68", "ip67", "splash"];
const AESTHETIC_ALIASES: &[&str] = &["color", "colour", "finish", "edition"];

/// The six premium features that earn a flat bonus each
const PREMIUM_FEATURES: [&str; 6] = [
    "wireless charging",
    "fast charging",
    "5g",
    "face",
    "fingerprint",
    "nfc",
];

/// Score all seven categories for one device.
///
/// `catalog` is the full candidate set the device is ranked within; it is
/// only consulted by the price scorer.
#[must_use]
pub fn score_categories(device: &DeviceRecord, catalog: &[DeviceRecord]) -> CategoryScores {
    CategoryScores {
        price: score_price(device, catalog),
        performance: score_performance(device),
        battery: score_battery(device),
        camera: score_camera(device),
        display: score_display(device),
        design: score_design(device),
        features: score_features(device),
    }
}

/// Price score, set-relative: the cheapest priced device in the set scores
/// 100, the most expensive 0, everything else linearly in between.
///
/// A device with no known price scores 0 against priced competitors. When no
/// device in the set has a price there is no signal and everyone scores the
/// neutral 50. When all known prices are equal there is no discriminating
/// signal and every priced device scores 100.
#[must_use]
pub fn score_price(device: &DeviceRecord, catalog: &[DeviceRecord]) -> f64 {
    let prices: Vec<f64> = catalog
        .iter()
        .filter_map(DeviceRecord::effective_price)
        .collect();
    if prices.is_empty() {
        return NEUTRAL_SCORE;
    }
    let Some(price) = device.effective_price() else {
        return 0.0;
    };

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return 100.0;
    }

    ((1.0 - (price - min) / (max - min)) * 100.0).clamp(0.0, 100.0)
}

/// Performance score: weighted blend of processor (0.4), RAM (0.3) and
/// storage type (0.3).
///
/// The processor value is read as a clock rate in GHz against a 3.5 GHz
/// ceiling; values too large to be a clock rate are treated as benchmark
/// points against a 1,000,000-point ceiling. Missing sub-factors are dropped
/// from both numerator and denominator; with no sub-factor at all the score
/// is the neutral 50.
#[must_use]
pub fn score_performance(device: &DeviceRecord) -> f64 {
    let extractor = SpecExtractor::new(device);

    let cpu = extractor.spec_number(PROCESSOR_ALIASES).map(|value| {
        if value > BENCHMARK_CUTOVER {
            (value / BENCHMARK_CEILING * 100.0).min(100.0)
        } else {
            (value / CPU_CLOCK_CEILING_GHZ * 100.0).min(100.0)
        }
    });
    let ram = extractor
        .spec_number(RAM_ALIASES)
        .map(|gb| (gb / RAM_CEILING_GB * 100.0).min(100.0));
    let storage = extractor.spec_text(STORAGE_ALIASES).map(|text| {
        if text.to_lowercase().contains("ssd") {
            80.0
        } else {
            40.0
        }
    });

    let factors = [(cpu, 0.4), (ram, 0.3), (storage, 0.3)];
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for (score, weight) in factors {
        if let Some(score) = score {
            weighted += score * weight;
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        (weighted / total_weight).clamp(0.0, 100.0)
    } else {
        NEUTRAL_SCORE
    }
}

/// Battery score: step function on parsed capacity in mAh
#[must_use]
pub fn score_battery(device: &DeviceRecord) -> f64 {
    let Some(capacity) = SpecExtractor::new(device).spec_number(BATTERY_ALIASES) else {
        return NEUTRAL_SCORE;
    };
    match capacity {
        c if c >= 4500.0 => 100.0,
        c if c >= 4000.0 => 85.0,
        c if c >= 3500.0 => 70.0,
        c if c >= 3000.0 => 55.0,
        c if c >= 2500.0 => 40.0,
        _ => 25.0,
    }
}

/// Camera score: base 50, plus megapixel bonus (up to 40 against a 108 MP
/// ceiling), plus 5 per camera spec entry (capped at 20), plus 15 for
/// optical stabilization and 10 for a night mode, capped at 100.
#[must_use]
pub fn score_camera(device: &DeviceRecord) -> f64 {
    let extractor = SpecExtractor::new(device);
    let mut score = 50.0;

    if let Some(megapixels) = extractor.spec_number(CAMERA_ALIASES) {
        score += (megapixels / CAMERA_MP_CEILING).min(1.0) * 40.0;
    }
    score += (extractor.count_specs(CAMERA_ALIASES) as f64 * 5.0).min(20.0);
    if extractor.feature_enabled(OIS_ALIASES) {
        score += 15.0;
    }
    if extractor.feature_enabled(NIGHT_MODE_ALIASES) {
        score += 10.0;
    }

    score.min(100.0)
}

/// Display score: base 50, plus screen size (up to 20 against a 7-inch
/// ceiling), plus a resolution tier bonus and a refresh rate bonus, capped
/// at 100.
#[must_use]
pub fn score_display(device: &DeviceRecord) -> f64 {
    let extractor = SpecExtractor::new(device);
    let mut score = 50.0;

    if let Some(inches) = extractor.spec_number(SCREEN_SIZE_ALIASES) {
        score += (inches / SCREEN_SIZE_CEILING_IN).min(1.0) * 20.0;
    }
    if let Some(resolution) = extractor.spec_text(RESOLUTION_ALIASES) {
        score += resolution_tier_bonus(resolution);
    }
    if let Some(rate) = extractor.spec_number(REFRESH_ALIASES) {
        if rate >= 120.0 {
            score += 15.0;
        } else if rate >= 90.0 {
            score += 10.0;
        }
    }

    score.min(100.0)
}

/// Discrete bonus by resolution tier, matched against the spec value text.
///
/// Tiers are checked from highest to lowest so that "Full HD" lands on the
/// FHD bonus rather than the bare "hd" substring.
fn resolution_tier_bonus(value: &str) -> f64 {
    let value = value.to_lowercase();
    if value.contains("4k") || value.contains("2160") {
        30.0
    } else if value.contains("1440") || value.contains("2k") || value.contains("qhd") {
        20.0
    } else if value.contains("1080") || value.contains("fhd") || value.contains("full hd") {
        15.0
    } else if value.contains("720") || value.contains("hd") {
        10.0
    } else {
        0.0
    }
}

/// Design score: base 60, +20 for a premium build material, +15 for water
/// resistance, +5 per aesthetic feature (capped at +15), capped at 100.
#[must_use]
pub fn score_design(device: &DeviceRecord) -> f64 {
    let extractor = SpecExtractor::new(device);
    let mut score = 60.0;

    if let Some(material) = extractor.spec_text(MATERIAL_ALIASES) {
        let material = material.to_lowercase();
        let premium = ["premium", "glass", "metal", "aluminum", "aluminium", "titanium", "ceramic"];
        if premium.iter().any(|marker| material.contains(marker)) {
            score += 20.0;
        }
    }
    if extractor.feature_enabled(WATER_ALIASES) {
        score += 15.0;
    }
    score += (extractor.count_enabled_features(AESTHETIC_ALIASES) as f64 * 5.0).min(15.0);

    score.min(100.0)
}

/// Features score: enabled-to-total ratio worth up to 60 points, plus 6 per
/// premium feature present and enabled, capped at 100.
///
/// A device listing no features at all scores 0 in this category - no
/// feature data means no feature credit.
#[must_use]
pub fn score_features(device: &DeviceRecord) -> f64 {
    let total = device.features.len();
    if total == 0 {
        return 0.0;
    }
    let enabled = device.features.iter().filter(|f| f.enabled).count();
    let mut score = enabled as f64 / total as f64 * 60.0;

    let extractor = SpecExtractor::new(device);
    for premium in PREMIUM_FEATURES {
        if extractor.feature_enabled(&[premium]) {
            score += 6.0;
        }
    }

    score.min(100.0)
}
