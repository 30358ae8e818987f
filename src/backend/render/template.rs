//! Canned-template renderers.
//!
//! Platforms with a rigid program shape (trading terminals) are served by a fixed source template compiled into the
//! binary. Rendering replaces `{{NAME}}` placeholders and never looks at the IR.
//!
//! ## Placeholders
//!
//! | Name            | Value                                                    |
//! |-----------------|----------------------------------------------------------|
//! | `GENERATOR`     | [`BuildMetadata::tool_name`]                             |
//! | `VERSION`       | [`BuildMetadata::version`]                               |
//! | `GENERATED_AT`  | [`BuildMetadata::generated_at`]                          |
//! | `MODEL_FILE`    | resolved `ML:CONFIG_machineLearningFile`, or empty       |
//! | `TRAINING_FILE` | resolved `ML:CONFIG_trainingFile`, or empty              |
//! | anything else   | analyst property of that name, or empty (logged)         |

use std::path::PathBuf;

use mlgen_core::lang::properties::{ML_CONFIG_MACHINE_LEARNING_FILE, ML_CONFIG_TRAINING_FILE};

use super::TemplateRenderer;
use crate::analyst::{AnalystConfig, resolve_configured_file};
use crate::backend::errors::GenerationError;
use crate::metadata::BuildMetadata;

const MQL4_TEMPLATE: &str = include_str!("../../../templates/mql4.mq4");
const NINJASCRIPT_TEMPLATE: &str = include_str!("../../../templates/ninjascript.cs");

/// A fixed template filled from an analyst configuration.
#[derive(Debug, Clone)]
pub struct CannedTemplate {
    name: &'static str,
    template: &'static str,
    contents: String,
}

impl CannedTemplate {
    pub fn new(name: &'static str, template: &'static str) -> Self {
        Self {
            name,
            template,
            contents: String::new(),
        }
    }

    /// MetaTrader 4 indicator.
    pub fn mql4() -> Self {
        Self::new("mql4", MQL4_TEMPLATE)
    }

    /// NinjaTrader indicator.
    pub fn ninjascript() -> Self {
        Self::new("ninjascript", NINJASCRIPT_TEMPLATE)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn display_path(path: Option<PathBuf>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

impl TemplateRenderer for CannedTemplate {
    #[tracing::instrument(skip_all, fields(template = self.name))]
    fn generate(&mut self, config: &dyn AnalystConfig, metadata: &dyn BuildMetadata) -> Result<(), GenerationError> {
        let model_file = display_path(resolve_configured_file(config, ML_CONFIG_MACHINE_LEARNING_FILE)?);
        let training_file = display_path(resolve_configured_file(config, ML_CONFIG_TRAINING_FILE)?);

        self.contents = fill_template(self.template, |key| match key {
            "GENERATOR" => Some(metadata.tool_name().to_string()),
            "VERSION" => Some(metadata.version().to_string()),
            "GENERATED_AT" => Some(metadata.generated_at()),
            "MODEL_FILE" => Some(model_file.clone()),
            "TRAINING_FILE" => Some(training_file.clone()),
            other => config.property(other).map(str::to_string),
        });
        Ok(())
    }

    fn contents(&self) -> &str {
        &self.contents
    }
}

/// Replace every `{{key}}` in `template` with `lookup(key)`.
///
/// Keys are trimmed. Unknown keys become the empty string. An unterminated `{{` is copied as is.
pub fn fill_template(template: &str, mut lookup: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = after[..end].trim();
        match lookup(key) {
            Some(value) => out.push_str(&value),
            None => tracing::warn!(placeholder = key, "template placeholder has no value"),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analyst::AnalystScript;
    use crate::metadata::FixedBuildMetadata;

    fn lookup(key: &str) -> Option<String> {
        match key {
            "A" => Some("alpha".to_string()),
            "B" => Some("beta".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_fill_replaces_placeholders() {
        assert_eq!(fill_template("x {{A}} y {{ B }}", lookup), "x alpha y beta");
    }

    #[test]
    fn test_missing_key_is_empty() {
        assert_eq!(fill_template("[{{NOPE}}]", lookup), "[]");
    }

    #[test]
    fn test_unterminated_placeholder_copied() {
        assert_eq!(fill_template("{{A}} and {{B", lookup), "alpha and {{B");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(fill_template("plain { text }", lookup), "plain { text }");
    }

    #[test]
    fn test_mql4_from_analyst() {
        let mut script = AnalystScript::new().with_base_dir("/work");
        script.define_file("FILE_ML", "net.json");
        script.set_property(ML_CONFIG_MACHINE_LEARNING_FILE, "FILE_ML");
        script.set_property("ML:CONFIG_type", "feedforward");
        let metadata = FixedBuildMetadata::new("9.9.9", "Mon Jan 01 00:00:00 2024");

        let mut template = CannedTemplate::mql4();
        template.generate(&script, &metadata).unwrap();
        let text = template.contents();
        assert!(text.contains("Code generated by mlgen v9.9.9"));
        assert!(text.contains("Generation Date: Mon Jan 01 00:00:00 2024"));
        assert!(text.contains("string MODEL_FILE = \"/work/net.json\";"));
        assert!(text.contains("string TRAINING_FILE = \"\";"));
        assert!(text.contains("// Model type: feedforward"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_undefined_file_fails() {
        let mut script = AnalystScript::new();
        script.set_property(ML_CONFIG_TRAINING_FILE, "FILE_GONE");
        let metadata = FixedBuildMetadata::new("1.0.0", "now");
        let mut template = CannedTemplate::ninjascript();
        assert!(matches!(
            template.generate(&script, &metadata),
            Err(GenerationError::Analyst(_))
        ));
        assert_eq!(template.contents(), "");
    }
}
