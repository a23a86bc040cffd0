//! Catalog loading stage.

use crate::catalog::parse_catalog;
use crate::model::DeviceRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a catalog file with consistent error context and a debug trace.
///
/// The catalog may legitimately be empty; callers decide whether an empty
/// ranking is acceptable for their command.
pub fn load_catalog_with_context(path: &Path) -> Result<Vec<DeviceRecord>> {
    let devices = parse_catalog(path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    tracing::debug!(
        device_count = devices.len(),
        "Loaded catalog from {}",
        path.display()
    );
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_load_catalog_with_context_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"[{{"id": "a", "name": "A"}}]"#).unwrap();

        let devices = load_catalog_with_context(&path).unwrap();
        assert_eq!(devices.len(), 1);
    }

    #[test]
    fn test_load_catalog_with_context_missing_file() {
        let err = load_catalog_with_context(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/catalog.json"));
    }
}
