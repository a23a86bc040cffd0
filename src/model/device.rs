//! Core device catalog data structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A price with its currency tag.
///
/// Currency is carried through unchanged; the engine never converts between
/// currencies. Comparisons across a catalog assume a uniform currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// Numeric amount in the tagged currency
    pub amount: f64,
    /// ISO-ish currency tag (e.g. "USD", "EUR")
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Money {
    /// Create a price in the default currency
    #[must_use]
    pub fn usd(amount: f64) -> Self {
        Self {
            amount,
            currency: default_currency(),
        }
    }
}

/// A single named specification with a free-text value.
///
/// Values come from loosely structured source data ("4.5GHz", "5000mAh",
/// "108MP") and require coercion before use. See [`crate::scoring::SpecExtractor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    /// Grouping label ("performance", "camera", ...)
    #[serde(default)]
    pub category: String,
    /// Specification name ("Processor", "Battery Capacity", ...)
    pub name: String,
    /// Free-text value as listed by the source
    pub value: String,
}

impl SpecEntry {
    /// Create a spec entry
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named boolean feature flag ("Wireless Charging: available").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    /// Feature name
    pub name: String,
    /// Whether the device actually has the feature
    #[serde(default)]
    pub enabled: bool,
}

impl FeatureFlag {
    /// Create a feature flag
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}

/// A device record - the scoring engine's only input entity.
///
/// Every attribute beyond identity is optional: source catalogs are
/// incomplete and scoring degrades to documented neutral defaults rather
/// than failing when data is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Stable identifier within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Price at launch
    #[serde(default)]
    pub launch_price: Option<Money>,
    /// Current listed price
    #[serde(default)]
    pub current_price: Option<Money>,
    /// Free-text specifications
    #[serde(default)]
    pub specifications: Vec<SpecEntry>,
    /// Boolean feature flags
    #[serde(default)]
    pub features: Vec<FeatureFlag>,
    /// Average user rating (0-5)
    #[serde(default)]
    pub rating: Option<f64>,
    /// Observed page view count
    #[serde(default)]
    pub view_count: Option<u64>,
    /// Market release date
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl DeviceRecord {
    /// Create a minimal record with identity only
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            launch_price: None,
            current_price: None,
            specifications: Vec::new(),
            features: Vec::new(),
            rating: None,
            view_count: None,
            release_date: None,
        }
    }

    /// Effective price: current price when known, launch price otherwise.
    ///
    /// Zero and negative amounts are treated as unknown, so a bogus current
    /// price still falls back to a valid launch price. Returns `None` when
    /// the device has no known price at all.
    #[must_use]
    pub fn effective_price(&self) -> Option<f64> {
        known_amount(self.current_price.as_ref()).or_else(|| known_amount(self.launch_price.as_ref()))
    }
}

/// A positive, finite amount, or `None`
fn known_amount(money: Option<&Money>) -> Option<f64> {
    money
        .map(|m| m.amount)
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}
