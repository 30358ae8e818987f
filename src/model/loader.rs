//! Load persisted models.
//!
//! Models are persisted as JSON objects tagged by `kind`:
//!
//! ```json
//! {"kind": "basic_network", "layers": [{"neurons": 2, "bias": true}, {"neurons": 1}], "weights": [0.1, 0.2, 0.3]}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BasicNetwork, MlMethod, RbfNetwork, SupportVectorMachine};

/// Errors produced while loading a model file.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed model file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model file {} declares {expected} weights but stores {actual}", path.display())]
    Shape {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("model file {} declares more weights than can be addressed", path.display())]
    Overflow { path: PathBuf },
}

/// On-disk model representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistedModel {
    BasicNetwork(BasicNetwork),
    RbfNetwork(RbfNetwork),
    Svm(SupportVectorMachine),
}

impl PersistedModel {
    /// Parse a model from JSON text. `path` is only used for error messages.
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ModelError> {
        let model: PersistedModel = serde_json::from_str(text).map_err(|source| ModelError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        if let PersistedModel::BasicNetwork(net) = &model {
            let expected = net
                .expected_weight_count()
                .ok_or_else(|| ModelError::Overflow { path: path.to_path_buf() })?;
            if expected != net.weights.len() {
                return Err(ModelError::Shape {
                    path: path.to_path_buf(),
                    expected,
                    actual: net.weights.len(),
                });
            }
        }
        Ok(model)
    }

    pub fn into_method(self) -> Box<dyn MlMethod> {
        match self {
            PersistedModel::BasicNetwork(net) => Box::new(net),
            PersistedModel::RbfNetwork(rbf) => Box::new(rbf),
            PersistedModel::Svm(svm) => Box::new(svm),
        }
    }
}

/// Turn a persisted model file into a model handle.
pub trait ModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn MlMethod>, ModelError>;
}

/// Loads the JSON format described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelLoader;

impl ModelLoader for JsonModelLoader {
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<Box<dyn MlMethod>, ModelError> {
        let text = fs::read_to_string(path)?;
        let model = PersistedModel::from_json(&text, path)?;
        tracing::debug!("loaded model");
        Ok(model.into_method())
    }
}
