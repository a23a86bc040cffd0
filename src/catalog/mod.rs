//! Device catalog ingestion.
//!
//! Catalogs arrive as JSON, either a bare array of device records or a
//! document with a top-level `devices` array. Unknown fields are ignored
//! and optional fields default, so partially populated exports load
//! cleanly; only structurally invalid JSON is an error.

use crate::error::{DevRankError, ErrorContext, ParseErrorKind, Result};
use crate::model::DeviceRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Catalog document wrapper form: `{"devices": [...]}`
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    devices: Vec<DeviceRecord>,
}

/// Parse a catalog file.
pub fn parse_catalog(path: &Path) -> Result<Vec<DeviceRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| DevRankError::io(path, e))?;
    parse_catalog_str(&content).with_context(|| format!("at {}", path.display()))
}

/// Parse catalog JSON from a string.
///
/// Accepts either a bare JSON array of devices or a `{"devices": [...]}`
/// wrapper. Duplicate device ids are tolerated and logged; downstream
/// tie-breaking treats the earlier entry as authoritative.
pub fn parse_catalog_str(content: &str) -> Result<Vec<DeviceRecord>> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let devices: Vec<DeviceRecord> = if value.is_array() {
        serde_json::from_value(value)?
    } else if value.get("devices").is_some() {
        let document: CatalogDocument = serde_json::from_value(value)?;
        document.devices
    } else {
        return Err(DevRankError::parse(
            "expected a device array or a {\"devices\": [...]} document",
            ParseErrorKind::NoDevices,
        ));
    };

    warn_on_duplicate_ids(&devices);
    Ok(devices)
}

/// Log a single summary line if the catalog repeats device ids.
fn warn_on_duplicate_ids(devices: &[DeviceRecord]) {
    let mut seen = HashSet::new();
    let duplicates = devices
        .iter()
        .filter(|device| !seen.insert(device.id.as_str()))
        .count();
    if duplicates > 0 {
        tracing::warn!(
            duplicates,
            "Catalog repeats {duplicates} device id(s); the first entry per id wins tie-breaks"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"id": "a1", "name": "Phone A1"},
            {"id": "b2", "name": "Phone B2"}
        ]"#;
        let devices = parse_catalog_str(json).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].id, "a1");
    }

    #[test]
    fn test_parse_wrapper_document() {
        let json = r#"{"devices": [{"id": "a1", "name": "Phone A1"}]}"#;
        let devices = parse_catalog_str(json).unwrap();
        assert_eq!(devices.len(), 1);
    }

    #[test]
    fn test_parse_full_record() {
        let json = r#"{"devices": [{
            "id": "x-pro",
            "name": "Phone X Pro",
            "launch_price": {"amount": 999.0, "currency": "USD"},
            "current_price": {"amount": 849.0, "currency": "USD"},
            "specifications": [
                {"category": "battery", "name": "Battery Capacity", "value": "5000mAh"}
            ],
            "features": [{"name": "NFC", "enabled": true}],
            "rating": 4.4,
            "view_count": 12800,
            "release_date": "2025-09-12"
        }]}"#;
        let devices = parse_catalog_str(json).unwrap();
        let device = &devices[0];
        assert_eq!(device.effective_price(), Some(849.0));
        assert_eq!(device.specifications.len(), 1);
        assert_eq!(device.view_count, Some(12800));
        assert!(device.release_date.is_some());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"[{"id": "a1", "name": "Phone A1", "brand": "Acme", "slug": "phone-a1"}]"#;
        let devices = parse_catalog_str(json).unwrap();
        assert_eq!(devices.len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_catalog_document() {
        let err = parse_catalog_str(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(
            err,
            DevRankError::Parse {
                source: ParseErrorKind::NoDevices,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_catalog_str("not json").is_err());
        assert!(parse_catalog_str(r#"[{"id": "a1"}]"#).is_err(), "name is required");
    }

    #[test]
    fn test_parse_empty_array_is_valid() {
        assert!(parse_catalog_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_keeps_path_in_error() {
        let err = parse_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
