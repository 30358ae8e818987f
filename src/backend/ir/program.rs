//! The IR arena and its builder operations.

use std::path::{Path, PathBuf};

use super::node::{CallTarget, NodeId, NodeKind, ProgramNode};
use super::{LOAD_TRAINING_FUNCTION, MAIN_FUNCTION};
use crate::dataset::TrainingSet;

/// A complete IR program.
///
/// Top-level members are comments and classes. Every builder method appends to the parent's children and returns
/// the new node's handle so callers can keep nesting.
#[derive(Debug, Clone, Default)]
pub struct Program {
    nodes: Vec<ProgramNode>,
    members: Vec<NodeId>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ProgramNode::new(kind, parent));
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.members.push(id),
        }
        id
    }

    // ---- builders -------------------------------------------------------

    /// Add a top-level comment.
    pub fn add_top_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.push(None, NodeKind::Comment { text: text.into() })
    }

    /// Add a comment inside `parent`.
    pub fn add_comment(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push(Some(parent), NodeKind::Comment { text: text.into() })
    }

    pub fn create_class(&mut self, name: impl Into<String>) -> NodeId {
        self.push(None, NodeKind::Class { name: name.into() })
    }

    pub fn create_main_function(&mut self, class: NodeId) -> NodeId {
        self.push(Some(class), NodeKind::MainFunction)
    }

    pub fn create_function(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.push(Some(parent), NodeKind::Function { name: name.into() })
    }

    /// Create a function rebuilding a model from `model_file`, seeded from `weights` when given.
    pub fn create_network_function(
        &mut self,
        class: NodeId,
        name: impl Into<String>,
        model_file: &Path,
        weights: Option<NodeId>,
    ) -> NodeId {
        self.push(
            Some(class),
            NodeKind::NetworkFunction {
                name: name.into(),
                model_file: model_file.to_path_buf(),
                weights,
            },
        )
    }

    pub fn create_array(&mut self, parent: NodeId, name: impl Into<String>, data: Vec<f64>) -> NodeId {
        self.push(Some(parent), NodeKind::ArrayLiteral { name: name.into(), data })
    }

    /// Bind the result of calling `target` to `variable` of type `result_type`.
    pub fn create_function_call(
        &mut self,
        parent: NodeId,
        target: impl Into<CallTarget>,
        result_type: impl Into<String>,
        variable: impl Into<String>,
    ) -> NodeId {
        self.push(
            Some(parent),
            NodeKind::FunctionCall {
                target: target.into(),
                result_type: result_type.into(),
                variable: variable.into(),
            },
        )
    }

    /// Attach inlined training data. Renderers emit nothing when `data` is `None`.
    pub fn embed_training(&mut self, parent: NodeId, file: &Path, data: Option<TrainingSet>) -> NodeId {
        self.push(
            Some(parent),
            NodeKind::EmbedTraining {
                file: file.to_path_buf(),
                data,
            },
        )
    }

    /// Attach a function that loads the training dataset.
    pub fn generate_load_training(&mut self, parent: NodeId, file: &Path) -> NodeId {
        self.push(
            Some(parent),
            NodeKind::LoadTraining {
                file: PathBuf::from(file),
            },
        )
    }

    // ---- read access ----------------------------------------------------

    /// Look up a node. Panics if `id` came from another program.
    pub fn node(&self, id: NodeId) -> &ProgramNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Top-level members in insertion order.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn classes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members
            .iter()
            .copied()
            .filter(|id| matches!(self.node(*id).kind, NodeKind::Class { .. }))
    }

    pub fn top_comments(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().filter_map(|id| match &self.node(*id).kind {
            NodeKind::Comment { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Emitted name of a function node, `None` for anything else.
    pub fn function_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Function { name } | NodeKind::NetworkFunction { name, .. } => Some(name.as_str()),
            NodeKind::MainFunction => Some(MAIN_FUNCTION),
            NodeKind::LoadTraining { .. } => Some(LOAD_TRAINING_FUNCTION),
            _ => None,
        }
    }

    /// Name of an array literal node, `None` for anything else.
    pub fn array_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::ArrayLiteral { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
