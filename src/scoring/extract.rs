//! Typed accessors over free-text specification and feature lists.
//!
//! Source catalogs carry loosely typed attribute bags: spec names like
//! "Battery Capacity" with values like "5000mAh". This module isolates the
//! string matching and numeric coercion so the category scorers stay free of
//! parsing concerns. A missed lookup is never an error - every scorer
//! supplies its own default.

use crate::model::DeviceRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Leading numeric prefix of an already-stripped value string.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]+").expect("static regex"));

/// Coerce free-text to a number.
///
/// Strips every character that is not an ASCII digit or decimal point, then
/// parses the leading numeric prefix of what remains ("5000mAh" -> 5000.0,
/// "1.5GHz" -> 1.5, "6.1 in (2.5D)" -> 6.1). Returns `None` when no leading
/// numeric prefix survives.
#[must_use]
pub fn coerce_number(text: &str) -> Option<f64> {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let matched = LEADING_NUMBER.find(&stripped)?;
    matched.as_str().parse().ok()
}

/// Lookup layer over one device's specification and feature lists.
///
/// All name matching is case-insensitive substring containment: a query
/// alias "cpu" matches a spec named "CPU Frequency". Aliases are checked in
/// the order given, so more specific aliases should come first.
#[derive(Debug, Clone, Copy)]
pub struct SpecExtractor<'a> {
    device: &'a DeviceRecord,
}

impl<'a> SpecExtractor<'a> {
    /// Wrap a device for spec/feature lookups
    #[must_use]
    pub const fn new(device: &'a DeviceRecord) -> Self {
        Self { device }
    }

    /// Free-text value of the first specification whose name contains one of
    /// the given aliases (checked alias by alias, in order).
    #[must_use]
    pub fn spec_text(&self, aliases: &[&str]) -> Option<&'a str> {
        for alias in aliases {
            let found = self
                .device
                .specifications
                .iter()
                .find(|spec| spec.name.to_lowercase().contains(alias));
            if let Some(spec) = found {
                return Some(spec.value.as_str());
            }
        }
        None
    }

    /// Numeric value of the first matching specification, if it coerces
    #[must_use]
    pub fn spec_number(&self, aliases: &[&str]) -> Option<f64> {
        self.spec_text(aliases).and_then(coerce_number)
    }

    /// Number of distinct specification entries matching any alias
    #[must_use]
    pub fn count_specs(&self, aliases: &[&str]) -> usize {
        self.device
            .specifications
            .iter()
            .filter(|spec| {
                let name = spec.name.to_lowercase();
                aliases.iter().any(|alias| name.contains(alias))
            })
            .count()
    }

    /// Whether any feature matching an alias is present and enabled
    #[must_use]
    pub fn feature_enabled(&self, aliases: &[&str]) -> bool {
        self.device.features.iter().any(|feature| {
            if !feature.enabled {
                return false;
            }
            let name = feature.name.to_lowercase();
            aliases.iter().any(|alias| name.contains(alias))
        })
    }

    /// Number of enabled features matching any alias
    #[must_use]
    pub fn count_enabled_features(&self, aliases: &[&str]) -> usize {
        self.device
            .features
            .iter()
            .filter(|feature| {
                if !feature.enabled {
                    return false;
                }
                let name = feature.name.to_lowercase();
                aliases.iter().any(|alias| name.contains(alias))
            })
            .count()
    }
}
