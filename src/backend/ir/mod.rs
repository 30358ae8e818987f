//! Target-independent program representation (IR)
//!
//! This module defines the tree the generator assembles before any target syntax is chosen. The IR is:
//!
//! - **Arena-backed**: nodes live in one `Vec` inside [`Program`] and are addressed by [`NodeId`]
//! - **Strict tree**: every node has one parent and children are kept in insertion order
//! - **Unchecked**: no name uniqueness or type validation happens here
//!
//! ## Pipeline
//!
//! ```text
//! model/data files → CodeGeneration → Program → Renderer → source text
//! ```
//!
//! A [`NodeKind::FunctionCall`] may point at another node through [`CallTarget::Node`]. That handle is a
//! non-owning reference: the callee stays owned by its own parent.

mod node;
mod program;

pub use node::{CallTarget, NodeId, NodeKind, ProgramNode};
pub use program::Program;

/// Name of the function emitted for [`NodeKind::LoadTraining`].
pub const LOAD_TRAINING_FUNCTION: &str = "createTraining";

/// Name of the program entry point.
pub const MAIN_FUNCTION: &str = "main";

/// Result type of calls producing a trained model.
pub const METHOD_RESULT_TYPE: &str = "MLMethod";

/// Result type of calls producing a training dataset.
pub const DATASET_RESULT_TYPE: &str = "MLDataSet";
