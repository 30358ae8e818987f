//! Shared IR traversal for general-purpose targets.
//!
//! [`SyntaxRenderer`] owns the document order; a [`LanguageSyntax`] only decides how each construct is spelled.
//!
//! Document order:
//! 1. top-level comments, then the language prologue
//! 2. per class: array literals and embedded training arrays, then functions in creation order, then `main`

use std::path::Path;

use super::ProgramRenderer;
use crate::backend::config::RenderConfig;
use crate::backend::errors::GenerationError;
use crate::backend::ir::{
    CallTarget, DATASET_RESULT_TYPE, LOAD_TRAINING_FUNCTION, METHOD_RESULT_TYPE, NodeId, NodeKind, Program,
};
use crate::backend::writer::CodeWriter;

/// Name of the embedded training input array.
pub const INPUT_DATA_ARRAY: &str = "INPUT_DATA";

/// Name of the embedded training ideal array.
pub const IDEAL_DATA_ARRAY: &str = "IDEAL_DATA";

/// Local variable holding the model inside the network function.
const NETWORK_VAR: &str = "network";

/// Local variable holding the dataset inside the training function.
const TRAINING_VAR: &str = "training";

/// Lexical rules of one general-purpose target.
///
/// Methods that open a block are responsible for indenting the writer; the matching close dedents.
pub trait LanguageSyntax {
    fn supports_separate_training(&self) -> bool {
        true
    }

    /// Write `text` as `//` comments, one per line.
    fn comment(&self, w: &mut CodeWriter, text: &str) {
        if text.is_empty() {
            w.writeln("//");
            return;
        }
        for line in text.lines() {
            if line.is_empty() {
                w.writeln("//");
            } else {
                w.writeln(&format!("// {line}"));
            }
        }
    }

    /// Imports or directives following the header comments.
    fn prologue(&self, _w: &mut CodeWriter) {}

    fn class_open(&self, w: &mut CodeWriter, name: &str);

    fn class_close(&self, w: &mut CodeWriter, name: &str);

    /// One-dimensional `double` array constant.
    fn array(&self, w: &mut CodeWriter, name: &str, values: &[f64], per_line: usize);

    /// Two-dimensional `double` array constant, one row per line.
    fn matrix(&self, w: &mut CodeWriter, name: &str, rows: &[Vec<f64>]);

    /// Open a function; `return_type` is `None` for functions returning nothing.
    fn function_open(&self, w: &mut CodeWriter, name: &str, return_type: Option<&str>);

    fn function_close(&self, w: &mut CodeWriter);

    /// Open the program entry point.
    fn main_open(&self, w: &mut CodeWriter);

    /// `variable = <load model from file>`
    fn load_model(&self, w: &mut CodeWriter, variable: &str, result_type: &str, file: &Path);

    /// Overwrite the parameters of `variable` from the array `weights`.
    fn decode_weights(&self, w: &mut CodeWriter, variable: &str, weights: &str);

    /// `variable = <load dataset from file>`
    fn load_training_file(&self, w: &mut CodeWriter, variable: &str, result_type: &str, file: &Path);

    /// `variable = <dataset built from the embedded arrays>`
    fn load_training_embedded(&self, w: &mut CodeWriter, variable: &str, result_type: &str, input: &str, ideal: &str);

    fn return_value(&self, w: &mut CodeWriter, variable: &str);

    /// `variable = function()`
    fn call(&self, w: &mut CodeWriter, function: &str, result_type: &str, variable: &str);

    /// Spelling of NaN and the infinities.
    fn non_finite_literal(&self, value: f64) -> String;

    fn double_literal(&self, value: f64) -> String {
        if value.is_finite() {
            format!("{value:?}")
        } else {
            self.non_finite_literal(value)
        }
    }
}

/// Write `values` as comma separated lines of at most `per_line` entries, the last line without a trailing comma.
pub(super) fn write_value_lines<S: LanguageSyntax + ?Sized>(
    syntax: &S,
    w: &mut CodeWriter,
    values: &[f64],
    per_line: usize,
) {
    let mut lines = values.chunks(per_line.max(1)).peekable();
    while let Some(line) = lines.next() {
        w.write(&join_values(syntax, line));
        if lines.peek().is_some() {
            w.write(",");
        }
        w.newline();
    }
}

/// `a, b, c`
pub(super) fn join_values<S: LanguageSyntax + ?Sized>(syntax: &S, values: &[f64]) -> String {
    values
        .iter()
        .map(|v| syntax.double_literal(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Double-quoted string literal with C-style escapes.
pub(super) fn quote_c_string(path: &Path) -> String {
    let mut out = String::from("\"");
    for ch in path.display().to_string().chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Tree-walking renderer shared by every general-purpose target.
pub struct SyntaxRenderer<S> {
    syntax: S,
    indent_width: usize,
    values_per_line: usize,
    writer: CodeWriter,
}

impl<S: LanguageSyntax> SyntaxRenderer<S> {
    pub fn new(syntax: S, config: &RenderConfig) -> Self {
        Self {
            syntax,
            indent_width: config.indent_width,
            values_per_line: config.values_per_line,
            writer: CodeWriter::new(config.indent_width),
        }
    }
}

impl<S: LanguageSyntax> ProgramRenderer for SyntaxRenderer<S> {
    #[tracing::instrument(skip_all, fields(node_count = program.len(), embed_data = embed_data))]
    fn generate(&mut self, program: &Program, embed_data: bool) -> Result<(), GenerationError> {
        // Previous contents survive a failed render.
        let mut writer = CodeWriter::new(self.indent_width);
        let mut walk = Walk {
            syntax: &self.syntax,
            w: &mut writer,
            program,
            embed_data,
            per_line: self.values_per_line,
        };
        walk.program()?;
        self.writer = writer;
        Ok(())
    }

    fn contents(&self) -> &str {
        self.writer.as_str()
    }

    fn supports_separate_training(&self) -> bool {
        self.syntax.supports_separate_training()
    }
}

/// One traversal of a program.
struct Walk<'a, S> {
    syntax: &'a S,
    w: &'a mut CodeWriter,
    program: &'a Program,
    embed_data: bool,
    per_line: usize,
}

impl<S: LanguageSyntax> Walk<'_, S> {
    fn program(&mut self) -> Result<(), GenerationError> {
        let program = self.program;
        for text in program.top_comments() {
            self.syntax.comment(self.w, text);
        }
        self.syntax.prologue(self.w);
        for class in program.classes() {
            self.class(class)?;
        }
        Ok(())
    }

    fn class(&mut self, class: NodeId) -> Result<(), GenerationError> {
        let program = self.program;
        let name = match &program.node(class).kind {
            NodeKind::Class { name } => name.as_str(),
            _ => return Ok(()),
        };
        let children = program.children(class);
        let training_embedded = self.has_embedded_training(children);

        self.syntax.class_open(self.w, name);
        let mut first = true;

        for &child in children {
            match &program.node(child).kind {
                NodeKind::ArrayLiteral { name, data } => {
                    self.separate(&mut first);
                    self.syntax.array(self.w, name, data, self.per_line);
                }
                NodeKind::EmbedTraining { data: Some(set), .. } if self.embed_data => {
                    self.separate(&mut first);
                    self.syntax.matrix(self.w, INPUT_DATA_ARRAY, &set.input);
                    self.syntax.matrix(self.w, IDEAL_DATA_ARRAY, &set.ideal);
                }
                _ => {}
            }
        }

        for &child in children {
            let node = program.node(child);
            match &node.kind {
                NodeKind::MainFunction => {}
                NodeKind::Comment { text } => {
                    self.separate(&mut first);
                    self.syntax.comment(self.w, text);
                }
                _ if node.is_function() => {
                    self.separate(&mut first);
                    self.function(child, training_embedded)?;
                }
                _ => {}
            }
        }

        for &child in children {
            if matches!(program.node(child).kind, NodeKind::MainFunction) {
                self.separate(&mut first);
                self.syntax.main_open(self.w);
                self.body(child)?;
                self.syntax.function_close(self.w);
            }
        }

        self.syntax.class_close(self.w, name);
        Ok(())
    }

    /// Whether `createTraining` should read the inlined arrays instead of the file.
    fn has_embedded_training(&self, children: &[NodeId]) -> bool {
        self.embed_data
            && children
                .iter()
                .any(|&c| matches!(self.program.node(c).kind, NodeKind::EmbedTraining { data: Some(_), .. }))
    }

    /// Blank line between class members.
    fn separate(&mut self, first: &mut bool) {
        if !*first {
            self.w.newline();
        }
        *first = false;
    }

    fn function(&mut self, id: NodeId, training_embedded: bool) -> Result<(), GenerationError> {
        let program = self.program;
        match &program.node(id).kind {
            NodeKind::Function { name } => {
                self.syntax.function_open(self.w, name, None);
                self.body(id)?;
            }
            NodeKind::NetworkFunction {
                name,
                model_file,
                weights,
            } => {
                self.syntax.function_open(self.w, name, Some(METHOD_RESULT_TYPE));
                self.syntax.load_model(self.w, NETWORK_VAR, METHOD_RESULT_TYPE, model_file);
                let decode_from = weights.and_then(|w| program.array_name(w)).filter(|_| self.embed_data);
                if let Some(array) = decode_from {
                    self.syntax.decode_weights(self.w, NETWORK_VAR, array);
                }
                self.body(id)?;
                self.syntax.return_value(self.w, NETWORK_VAR);
            }
            NodeKind::LoadTraining { file } => {
                self.syntax.function_open(self.w, LOAD_TRAINING_FUNCTION, Some(DATASET_RESULT_TYPE));
                if training_embedded {
                    self.syntax.load_training_embedded(
                        self.w,
                        TRAINING_VAR,
                        DATASET_RESULT_TYPE,
                        INPUT_DATA_ARRAY,
                        IDEAL_DATA_ARRAY,
                    );
                } else {
                    self.syntax.load_training_file(self.w, TRAINING_VAR, DATASET_RESULT_TYPE, file);
                }
                self.body(id)?;
                self.syntax.return_value(self.w, TRAINING_VAR);
            }
            other => {
                tracing::warn!(node = ?other, "skipping non-function class member");
                return Ok(());
            }
        }
        self.syntax.function_close(self.w);
        Ok(())
    }

    /// Statements of a function in creation order.
    fn body(&mut self, function: NodeId) -> Result<(), GenerationError> {
        let program = self.program;
        for &stmt in program.children(function) {
            match &program.node(stmt).kind {
                NodeKind::Comment { text } => self.syntax.comment(self.w, text),
                NodeKind::ArrayLiteral { name, data } => self.syntax.array(self.w, name, data, self.per_line),
                NodeKind::FunctionCall {
                    target,
                    result_type,
                    variable,
                } => {
                    let callee = match target {
                        CallTarget::Node(id) => {
                            program
                                .function_name(*id)
                                .ok_or_else(|| GenerationError::InvalidCallTarget {
                                    variable: variable.clone(),
                                })?
                        }
                        CallTarget::Named(name) => name.as_str(),
                    };
                    self.syntax.call(self.w, callee, result_type, variable);
                }
                other => tracing::warn!(node = ?other, "skipping unsupported statement"),
            }
        }
        Ok(())
    }
}
