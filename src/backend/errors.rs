//! Define error types for code generation.
//!
//! Every failure aborts the whole session: renderers only materialize complete in-memory documents, so nothing is
//! written to disk when one of these is returned.
//!
//! ## Notes
//!
//! - I/O failures from collaborators (model, dataset and analyst loaders) keep their original error as the source.
//! - Prefer actionable messages: users should know which input to change.

use std::path::PathBuf;

use miette::Diagnostic;
use mlgen_core::lang::targets::RendererVariant;
use thiserror::Error;

use crate::analyst::AnalystError;
use crate::dataset::DatasetError;
use crate::model::{ModelError, ModelKind};

/// Error during code generation.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    /// No renderer exists for the requested target tag.
    #[error("no target language has been specified for code generation")]
    #[diagnostic(
        code(mlgen::configuration),
        help("pass a target such as `--target java`; `mlgen targets` lists them")
    )]
    Configuration,

    /// Weight embedding was requested for a model without encodable parameters.
    #[error("cannot embed the parameters of a {kind}: the model is not encodable")]
    #[diagnostic(
        code(mlgen::unsupported_model),
        help("generate without `--embed` to load the model file at runtime")
    )]
    UnsupportedModel { kind: ModelKind },

    /// An entry point was used on the wrong renderer variant.
    #[error("`{operation}` needs a {expected} renderer but this session uses a {actual} renderer")]
    #[diagnostic(code(mlgen::invalid_renderer_use))]
    InvalidRendererUse {
        operation: &'static str,
        expected: RendererVariant,
        actual: RendererVariant,
    },

    /// A call node points at something that is not a function.
    #[error("call binding `{variable}` does not target a function")]
    #[diagnostic(code(mlgen::invalid_call_target))]
    InvalidCallTarget { variable: String },

    #[error(transparent)]
    #[diagnostic(code(mlgen::model))]
    Model(#[from] ModelError),

    #[error(transparent)]
    #[diagnostic(code(mlgen::dataset))]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    #[diagnostic(code(mlgen::analyst))]
    Analyst(#[from] AnalystError),

    #[error("failed to write {}: {source}", path.display())]
    #[diagnostic(code(mlgen::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
