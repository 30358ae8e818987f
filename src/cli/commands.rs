//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};
use std::path::Path;

use mlgen_core::lang::targets::{self, TargetLanguage};

use super::{CliError, CliResult, ExitCode};
use crate::analyst::AnalystScript;
use crate::backend::{CodeGeneration, GenerationError, RenderConfig};
use crate::metadata::SystemBuildMetadata;

/// Arguments of `mlgen generate`.
#[derive(Debug)]
pub struct GenerateArgs<'a> {
    pub target: TargetLanguage,
    pub model: Option<&'a Path>,
    pub data: Option<&'a Path>,
    pub embed: bool,
    pub class: Option<&'a str>,
    pub output: Option<&'a Path>,
}

/// Render a generation error with its diagnostic code and help.
fn report(err: GenerationError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(err)))
}

fn session(target: TargetLanguage, embed: bool, class: Option<&str>) -> CliResult<CodeGeneration> {
    let mut config = RenderConfig::default();
    if let Some(name) = class {
        config = config.with_class_name(name);
    }
    let mut generation =
        CodeGeneration::with_config(target, Box::new(SystemBuildMetadata), config).map_err(report)?;
    generation.set_embed_data(embed);
    Ok(generation)
}

/// Write the rendered document to `output`, or stdout.
fn emit(generation: &CodeGeneration, output: Option<&Path>) -> CliResult<ExitCode> {
    match output {
        Some(path) => generation.save_to(path).map_err(report)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(generation.save().as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {e}")))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// `mlgen generate`
pub fn generate(args: &GenerateArgs<'_>) -> CliResult<ExitCode> {
    if args.model.is_none() && args.data.is_none() {
        tracing::warn!("neither --model nor --data given; generating an empty program");
    }
    let mut generation = session(args.target, args.embed, args.class)?;
    generation.generate(args.model, args.data).map_err(report)?;
    emit(&generation, args.output)
}

/// `mlgen analyst`
pub fn analyst(target: TargetLanguage, config: &Path, embed: bool, output: Option<&Path>) -> CliResult<ExitCode> {
    let script = AnalystScript::load(config).map_err(|e| report(e.into()))?;
    let mut generation = session(target, embed, None)?;
    generation.generate_from_analyst(&script).map_err(report)?;
    emit(&generation, output)
}

/// `mlgen targets`
pub fn list_targets() -> CliResult<ExitCode> {
    for info in targets::TARGETS {
        let Some(variant) = info.variant else {
            continue;
        };
        let aliases = if info.aliases.is_empty() {
            String::new()
        } else {
            format!(" (aliases: {})", info.aliases.join(", "))
        };
        println!(
            "{:<12} {:<8} .{:<5} {}{}",
            info.canonical,
            variant.to_string(),
            info.extension.unwrap_or(""),
            info.description,
            aliases
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Example.java");
        let args = GenerateArgs {
            target: TargetLanguage::Java,
            model: None,
            data: None,
            embed: false,
            class: Some("Example"),
            output: Some(&out),
        };
        assert_eq!(generate(&args).unwrap(), ExitCode::SUCCESS);
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("public class Example {"));
    }

    #[test]
    fn test_missing_model_reports_failure() {
        let args = GenerateArgs {
            target: TargetLanguage::Java,
            model: Some(Path::new("/no/such/model.json")),
            data: None,
            embed: true,
            class: None,
            output: None,
        };
        let err = generate(&args).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_no_generation_target_fails() {
        let args = GenerateArgs {
            target: TargetLanguage::NoGeneration,
            model: None,
            data: None,
            embed: false,
            class: None,
            output: None,
        };
        let err = generate(&args).unwrap_err();
        assert!(err.message.contains("no target language"));
    }
}
