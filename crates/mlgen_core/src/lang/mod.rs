//! Canonical vocabularies used by mlgen.
//!
//! ## See also
//! - [`targets`]: output target registry
//! - [`properties`]: analyst script property keys

pub mod properties;
pub mod targets;
