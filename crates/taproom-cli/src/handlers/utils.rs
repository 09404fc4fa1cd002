//! Shared utilities for command handlers

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Whether a path names a YAML document
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Load a JSON or YAML document, choosing the parser by extension
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| {
            tracing::debug!(error = %e, "YAML parse failed");
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "YAML".to_string(),
            }
        })
    } else {
        serde_json::from_str(&content).map_err(|e| {
            tracing::debug!(error = %e, "JSON parse failed");
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "JSON".to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use taproom_core::Scenario;
    use tempfile::{Builder, NamedTempFile};

    fn temp_with_suffix(suffix: &str) -> NamedTempFile {
        Builder::new().suffix(suffix).tempfile().unwrap()
    }

    #[test]
    fn test_load_yaml_scenario() {
        let mut file = temp_with_suffix(".yaml");
        writeln!(
            file,
            "form:\n  fields:\n    - name: email\n      kind: email\nevents:\n  - event: blur\n    field: email\n    value: a@b.co"
        )
        .unwrap();

        let scenario: Scenario = load_document(file.path()).unwrap();
        assert_eq!(scenario.events.len(), 1);
        assert_eq!(scenario.form.fields[0].name, "email");
    }

    #[test]
    fn test_invalid_json_reports_format() {
        let mut file = temp_with_suffix(".json");
        write!(file, "{{ not json").unwrap();

        let err = load_document::<Scenario>(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { ref expected, .. } if expected == "JSON"));
    }

    #[test]
    fn test_missing_document() {
        let err = load_document::<Scenario>(Path::new("/no/such/session.json")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
