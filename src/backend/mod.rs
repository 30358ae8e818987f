//! Code generation backend
//!
//! This module turns trained model files into target-language source code.
//!
//! The pipeline is:
//! 1. Model/training files → CodeGeneration → target-independent [`ir::Program`]
//! 2. Program → [`render::Renderer`] → materialized document
//! 3. Document → file or stdout
//!
//! ## Module Organization
//!
//! - `ir/` - Arena-backed program tree
//! - `embed.rs` - Inline model parameters as a `WEIGHTS` array literal
//! - `render/` - Program renderers (Java, C#, JavaScript) and canned templates (MQL4, NinjaScript)
//! - `generation.rs` - Session orchestration
//! - `writer.rs` - Indentation-aware output buffer
//! - `config.rs` - Rendering settings
//! - `errors.rs` - [`GenerationError`]

#![deny(clippy::unwrap_used)]

pub mod config;
pub mod embed;
pub mod errors;
pub mod generation;
pub mod ir;
pub mod render;
pub mod writer;

pub use config::RenderConfig;
pub use errors::GenerationError;
pub use generation::{CodeGeneration, SessionState};
pub use render::Renderer;
