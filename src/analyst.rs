//! Analyst configuration.
//!
//! An analyst script describes a model/training-data pairing: flat string properties plus a table of named files.
//! The generator only needs two things from it, so it talks to the [`AnalystConfig`] trait; [`AnalystScript`] is the
//! JSON-backed implementation used by the CLI:
//!
//! ```json
//! {
//!   "properties": {"ML:CONFIG_machineLearningFile": "FILE_ML", "ML:CONFIG_trainingFile": "FILE_TRAIN"},
//!   "files": {"FILE_ML": "iris.json", "FILE_TRAIN": "iris_train.json"}
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by analyst scripts.
#[derive(Debug, Error)]
pub enum AnalystError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed analyst script {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("undefined file identifier: {0}")]
    UndefinedFile(String),
}

/// Read access to an analyst configuration.
pub trait AnalystConfig {
    /// Value of a named property, if declared.
    fn property(&self, key: &str) -> Option<&str>;

    /// Turn a file identifier into a filesystem path.
    fn resolve_filename(&self, id: &str) -> Result<PathBuf, AnalystError>;
}

/// JSON-backed analyst script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalystScript {
    /// Directory bare filenames are resolved against.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl AnalystScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a script; without an explicit `base_dir` files resolve next to the script.
    pub fn load(path: &Path) -> Result<Self, AnalystError> {
        let text = fs::read_to_string(path)?;
        let mut script: AnalystScript = serde_json::from_str(&text).map_err(|source| AnalystError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        if script.base_dir.is_none() {
            script.base_dir = path.parent().map(Path::to_path_buf);
        }
        Ok(script)
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn define_file(&mut self, id: impl Into<String>, filename: impl Into<String>) {
        self.files.insert(id.into(), filename.into());
    }
}

impl AnalystConfig for AnalystScript {
    fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    fn resolve_filename(&self, id: &str) -> Result<PathBuf, AnalystError> {
        let name = self
            .files
            .get(id)
            .ok_or_else(|| AnalystError::UndefinedFile(id.to_string()))?;
        let file = PathBuf::from(name);
        let is_bare = file.parent().is_none_or(|p| p.as_os_str().is_empty());
        match &self.base_dir {
            Some(base) if is_bare => Ok(base.join(file)),
            _ => Ok(file),
        }
    }
}

/// Resolve the file named by property `key`.
///
/// A missing or empty property means "no file". A property naming an undefined identifier is an error.
pub fn resolve_configured_file(config: &dyn AnalystConfig, key: &str) -> Result<Option<PathBuf>, AnalystError> {
    match config.property(key).map(str::trim) {
        None | Some("") => Ok(None),
        Some(id) => config.resolve_filename(id).map(Some),
    }
}
