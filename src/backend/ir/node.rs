//! IR node definitions

use std::path::PathBuf;

use crate::dataset::TrainingSet;

/// Stable handle of a node inside one [`super::Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a call node invokes.
#[derive(Debug, Clone, PartialEq)]
pub enum CallTarget {
    /// A function node created in the same program
    Node(NodeId),
    /// A function referenced only by name
    Named(String),
}

impl From<NodeId> for CallTarget {
    fn from(id: NodeId) -> Self {
        CallTarget::Node(id)
    }
}

impl From<&str> for CallTarget {
    fn from(name: &str) -> Self {
        CallTarget::Named(name.to_string())
    }
}

/// Node kinds
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Comment {
        text: String,
    },

    Class {
        name: String,
    },

    /// Plain function; the body is its children
    Function {
        name: String,
    },

    /// Program entry point
    MainFunction,

    /// Function that reconstructs a trained model from `model_file`
    NetworkFunction {
        name: String,
        model_file: PathBuf,
        /// Array the model parameters are decoded from, when embedded
        weights: Option<NodeId>,
    },

    /// Named literal array of doubles
    ArrayLiteral {
        name: String,
        data: Vec<f64>,
    },

    /// Bind the result of a call to a typed variable
    FunctionCall {
        target: CallTarget,
        result_type: String,
        variable: String,
    },

    /// Training rows inlined as literal arrays; `data` is only present when embedding was requested
    EmbedTraining {
        file: PathBuf,
        data: Option<TrainingSet>,
    },

    /// Function that loads the training dataset
    LoadTraining {
        file: PathBuf,
    },
}

/// An IR node
#[derive(Debug, Clone)]
pub struct ProgramNode {
    pub kind: NodeKind,
    /// `None` for top-level members
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl ProgramNode {
    pub(super) fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
        }
    }

    /// Whether this node is emitted as a function.
    pub fn is_function(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Function { .. }
                | NodeKind::MainFunction
                | NodeKind::NetworkFunction { .. }
                | NodeKind::LoadTraining { .. }
        )
    }
}
