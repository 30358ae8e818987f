//! Build metadata stamped into generated files.
//!
//! Generated sources start with a header naming the tool, its version and the generation time. The generator never
//! looks these up globally; a [`BuildMetadata`] provider is handed to it at construction so tests can pin every value.

use chrono::Local;

use crate::version::{MLGEN_HOMEPAGE, MLGEN_VERSION};

/// Provide tool identity and timestamps for generated file headers.
pub trait BuildMetadata {
    /// Tool name (e.g. `mlgen`).
    fn tool_name(&self) -> &str;

    /// Tool version (e.g. `0.1.0`).
    fn version(&self) -> &str;

    /// Home page URL printed in headers.
    fn homepage(&self) -> &str;

    /// Human-readable generation timestamp.
    fn generated_at(&self) -> String;
}

/// Metadata for the running binary, timestamped with the local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBuildMetadata;

impl BuildMetadata for SystemBuildMetadata {
    fn tool_name(&self) -> &str {
        "mlgen"
    }

    fn version(&self) -> &str {
        MLGEN_VERSION
    }

    fn homepage(&self) -> &str {
        MLGEN_HOMEPAGE
    }

    fn generated_at(&self) -> String {
        Local::now().format("%a %b %d %H:%M:%S %Y").to_string()
    }
}

/// Fixed metadata for reproducible output.
#[derive(Debug, Clone)]
pub struct FixedBuildMetadata {
    pub tool_name: String,
    pub version: String,
    pub homepage: String,
    pub generated_at: String,
}

impl FixedBuildMetadata {
    pub fn new(version: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            tool_name: "mlgen".to_string(),
            version: version.into(),
            homepage: MLGEN_HOMEPAGE.to_string(),
            generated_at: generated_at.into(),
        }
    }
}

impl BuildMetadata for FixedBuildMetadata {
    fn tool_name(&self) -> &str {
        &self.tool_name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn homepage(&self) -> &str {
        &self.homepage
    }

    fn generated_at(&self) -> String {
        self.generated_at.clone()
    }
}
