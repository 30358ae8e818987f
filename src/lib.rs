#![forbid(unsafe_code)]
//! Multi-target code generator for trained machine learning models
//!
//! mlgen reads a trained model and/or a training set and emits a standalone program for another platform that loads
//! them (or carries them inline) and is ready for the user to extend.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod analyst;
pub mod backend;
pub mod cli;
pub mod dataset;
pub mod metadata;
pub mod model;
pub mod version;

pub use analyst::{AnalystConfig, AnalystScript};
pub use backend::{CodeGeneration, GenerationError, RenderConfig, SessionState};
pub use metadata::{BuildMetadata, FixedBuildMetadata, SystemBuildMetadata};
pub use mlgen_core::lang::targets::{RendererVariant, TargetLanguage};
