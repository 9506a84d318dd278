use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::BatchError;

/// Read an ROI segmentation file into its top-level mapping.
///
/// The whole file is read and closed before parsing starts.
pub fn read_roi_file(path: &Path) -> Result<Map<String, Value>, BatchError> {
    if !path.exists() {
        return Err(BatchError::MissingInputFile(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value =
        serde_json::from_str(&contents).map_err(|source| BatchError::InvalidInput {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(BatchError::NotAMapping(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rois.json");
        fs::write(&path, r#"{"b": [[0, 0]], "a": [[1, 1]]}"#).unwrap();

        let map = read_roi_file(&path).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_roi_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(BatchError::MissingInputFile(_))));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            read_roi_file(&path),
            Err(BatchError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_top_level_not_a_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, "[[0, 0]]").unwrap();
        assert!(matches!(
            read_roi_file(&path),
            Err(BatchError::NotAMapping(_))
        ));
    }
}
