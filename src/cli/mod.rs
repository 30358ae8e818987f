//! CLI module for the mlgen code generator
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate --target <t>` - Generate a program from model and/or training files
//! - `analyst --target <t> --config <file>` - Generate from an analyst script
//! - `targets` - List supported target languages
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mlgen_core::lang::targets::{self, TargetLanguage};

use crate::version::MLGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate standalone programs from trained machine learning models
#[derive(Parser, Debug)]
#[command(name = "mlgen")]
#[command(version = MLGEN_VERSION)]
#[command(about = "Generate standalone programs from trained machine learning models", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a program that loads a model and/or training set
    Generate {
        /// Target language (see `mlgen targets`)
        #[arg(short, long, value_parser = parse_target)]
        target: TargetLanguage,
        /// Persisted model file
        #[arg(short, long, value_name = "FILE")]
        model: Option<PathBuf>,
        /// Training set file
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
        /// Inline model parameters and training rows in the generated source
        #[arg(long)]
        embed: bool,
        /// Name of the generated class
        #[arg(long, value_name = "NAME")]
        class: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate from an analyst script
    Analyst {
        /// Target language (see `mlgen targets`)
        #[arg(short, long, value_parser = parse_target)]
        target: TargetLanguage,
        /// Analyst script (JSON)
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,
        /// Inline model parameters and training rows in the generated source
        #[arg(long)]
        embed: bool,
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List supported target languages
    Targets,
}

/// Resolve a target spelling (`java`, `cs`, `mq4`, ...).
fn parse_target(value: &str) -> Result<TargetLanguage, String> {
    targets::from_str(value).ok_or_else(|| {
        let known: Vec<&str> = targets::TARGETS.iter().map(|t| t.canonical).collect();
        format!("unknown target `{value}` (expected one of: {})", known.join(", "))
    })
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            target,
            model,
            data,
            embed,
            class,
            output,
        } => commands::generate(&commands::GenerateArgs {
            target,
            model: model.as_deref(),
            data: data.as_deref(),
            embed,
            class: class.as_deref(),
            output: output.as_deref(),
        }),
        Command::Analyst {
            target,
            config,
            embed,
            output,
        } => commands::analyst(target, &config, embed, output.as_deref()),
        Command::Targets => commands::list_targets(),
    }
}

// ============================================================================
// Tests
// ============================================================================
