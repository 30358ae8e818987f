//! mlgen version information.
//!
//! This module exposes the generator version as a single constant so all subsystems
//! (CLI, file headers, template placeholders) agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The mlgen version string (for example, `0.1.0-alpha.1`).
pub const MLGEN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project home page printed in generated file headers.
pub const MLGEN_HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
