//! Provide the canonical, pure vocabulary shared by the mlgen generator and its tooling.
//!
//! This crate is intentionally small and dependency-free. It contains:
//! - the closed registry of output targets and the renderer variant each one maps to, and
//! - the analyst script property keys the generator reads.
//!
//! ## Notes
//!
//! - No IO, no global state, and no generator-specific types live here.

pub mod lang;
