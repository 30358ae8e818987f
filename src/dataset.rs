//! Training datasets.
//!
//! A training set is a list of input rows paired with ideal (expected output) rows, persisted as JSON:
//!
//! ```json
//! {"input": [[0.0, 1.0], [1.0, 0.0]], "ideal": [[1.0], [1.0]]}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a training set.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed training file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("training file {} has {inputs} input rows but {ideals} ideal rows", path.display())]
    RowMismatch { path: PathBuf, inputs: usize, ideals: usize },
}

/// Paired input/ideal rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingSet {
    pub input: Vec<Vec<f64>>,
    pub ideal: Vec<Vec<f64>>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Parse a training set from JSON text. `path` is only used for error messages.
    pub fn from_json(text: &str, path: &Path) -> Result<Self, DatasetError> {
        let set: TrainingSet = serde_json::from_str(text).map_err(|source| DatasetError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        if set.input.len() != set.ideal.len() {
            return Err(DatasetError::RowMismatch {
                path: path.to_path_buf(),
                inputs: set.input.len(),
                ideals: set.ideal.len(),
            });
        }
        Ok(set)
    }
}

/// Turn a persisted training file into rows.
pub trait DatasetLoader {
    fn load(&self, path: &Path) -> Result<TrainingSet, DatasetError>;
}

/// Loads the JSON format described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDatasetLoader;

impl DatasetLoader for JsonDatasetLoader {
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<TrainingSet, DatasetError> {
        let text = fs::read_to_string(path)?;
        let set = TrainingSet::from_json(&text, path)?;
        tracing::debug!(rows = set.len(), "loaded training set");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_training_set() {
        let set = TrainingSet::from_json(r#"{"input": [[0.0, 1.0]], "ideal": [[1.0]]}"#, Path::new("t.json")).unwrap();
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_row_mismatch_rejected() {
        let err = TrainingSet::from_json(r#"{"input": [[0.0], [1.0]], "ideal": [[1.0]]}"#, Path::new("t.json"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::RowMismatch { inputs: 2, ideals: 1, .. }));
    }
}
