//! Trained model handles consumed by the generator.
//!
//! The generator does not care how a model was trained. It needs an opaque handle that can say what kind of model
//! it is and, optionally, expose the [`Encodable`] capability: a fixed parameter count plus the ability to copy its
//! current parameters into a flat buffer.
//!
//! ## Module Organization
//!
//! - `network.rs` - feed-forward [`BasicNetwork`], the representation code generation supports
//! - `rbf.rs` - [`RbfNetwork`], encodable but not a generation target
//! - `svm.rs` - [`SupportVectorMachine`], neither encodable nor supported
//! - `loader.rs` - [`ModelLoader`] and the JSON-backed [`JsonModelLoader`]

mod loader;
mod network;
mod rbf;
mod svm;

pub use loader::{JsonModelLoader, ModelError, ModelLoader, PersistedModel};
pub use network::{Activation, BasicNetwork, Layer};
pub use rbf::RbfNetwork;
pub use svm::SupportVectorMachine;

use std::fmt;

/// Kind of a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    BasicNetwork,
    RbfNetwork,
    SupportVectorMachine,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::BasicNetwork => write!(f, "basic network"),
            ModelKind::RbfNetwork => write!(f, "RBF network"),
            ModelKind::SupportVectorMachine => write!(f, "support vector machine"),
        }
    }
}

/// A model whose numeric parameters can be flattened into an array.
pub trait Encodable {
    /// Number of parameters [`Encodable::encode_to`] writes.
    fn encoded_len(&self) -> usize;

    /// Copy the parameters into `buf`, which must be exactly [`Encodable::encoded_len`] long.
    fn encode_to(&self, buf: &mut [f64]);
}

/// An opaque trained model.
pub trait MlMethod: fmt::Debug {
    fn kind(&self) -> ModelKind;

    /// The encodable capability, if this model has one.
    fn as_encodable(&self) -> Option<&dyn Encodable> {
        None
    }
}
