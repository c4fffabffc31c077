use crate::error::{DevrankError, Result};
use crate::types::device::DeviceRecord;
use serde::Deserialize;
use std::path::Path;

/// Accepts either a bare JSON array of devices or an object wrapping the
/// array under a `devices` key, which is how catalog exports arrive.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<DeviceRecord>),
    Wrapped { devices: Vec<DeviceRecord> },
}

pub fn load_catalog(path: &Path) -> Result<Vec<DeviceRecord>> {
    if !path.exists() {
        return Err(DevrankError::CatalogNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let parsed: CatalogFile = serde_json::from_str(&content)
        .map_err(|e| DevrankError::CatalogParse(format!("{}: {}", path.display(), e)))?;
    let devices = match parsed {
        CatalogFile::Bare(devices) => devices,
        CatalogFile::Wrapped { devices } => devices,
    };
    tracing::debug!(path = %path.display(), devices = devices.len(), "loaded catalog");
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_bare_array() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("devices.json");
        fs::write(
            &path,
            r#"[{"id": "d1", "name": "One"}, {"id": "d2", "name": "Two"}]"#,
        )
        .expect("catalog should write");
        let devices = load_catalog(&path).expect("catalog should load");
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].id, "d1");
    }

    #[test]
    fn loads_wrapped_object() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("devices.json");
        fs::write(
            &path,
            r#"{"devices": [{"id": "d1", "name": "One", "battery_mah": 5000}]}"#,
        )
        .expect("catalog should write");
        let devices = load_catalog(&path).expect("catalog should load");
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].battery_mah, Some(5000));
    }

    #[test]
    fn missing_file_is_catalog_not_found() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_catalog(&dir.path().join("nope.json")).expect_err("should fail");
        assert!(matches!(err, DevrankError::CatalogNotFound(_)));
    }

    #[test]
    fn malformed_json_is_catalog_parse() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("devices.json");
        fs::write(&path, "{not json").expect("file should write");
        let err = load_catalog(&path).expect_err("should fail");
        assert!(matches!(err, DevrankError::CatalogParse(_)));
    }
}
