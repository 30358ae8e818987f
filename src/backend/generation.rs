//! Generation orchestrator.
//!
//! [`CodeGeneration`] owns one session: it picks the renderer for the requested target, assembles the [`Program`]
//! from model and training files, and renders it.
//!
//! ## Generated shape
//!
//! ```text
//! // header comments
//! class <name>
//!     WEIGHTS                     (embed + model)
//!     INPUT_DATA / IDEAL_DATA     (embed + data)
//!     createTraining()            (data; twice when the target supports separate training)
//!     createNetwork()             (model)
//!     main()
//!         method = createNetwork()
//!         training = createTraining()
//! ```
//!
//! ## Notes
//!
//! - Every input file is read before the program is touched, so a failed `generate` leaves the IR as it was.
//! - A second `generate` on the same session appends a second class; the rendered document contains both.

use std::path::Path;

use mlgen_core::lang::properties::{ML_CONFIG_MACHINE_LEARNING_FILE, ML_CONFIG_TRAINING_FILE};
use mlgen_core::lang::targets::{RendererVariant, TargetLanguage};

use super::config::RenderConfig;
use super::embed::embed_weights;
use super::errors::GenerationError;
use super::ir::{DATASET_RESULT_TYPE, LOAD_TRAINING_FUNCTION, METHOD_RESULT_TYPE, NodeId, Program};
use super::render::Renderer;
use crate::analyst::{AnalystConfig, resolve_configured_file};
use crate::dataset::{DatasetLoader, JsonDatasetLoader, TrainingSet};
use crate::metadata::BuildMetadata;
use crate::model::{JsonModelLoader, MlMethod, ModelKind, ModelLoader};

/// Name of the generated network construction function.
pub const NETWORK_FUNCTION: &str = "createNetwork";

/// Comment closing the generated entry point.
const MAIN_TRAILER: &str = "Network and/or data is now loaded, you can add code to train, evaluate, etc.";

/// Progress of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing generated yet.
    Empty,
    /// The program was assembled but rendering failed.
    Built,
    /// The renderer holds a complete document. Terminal.
    Rendered,
}

/// Inputs read up front by [`CodeGeneration::generate`].
struct Inputs {
    model: Option<Box<dyn MlMethod>>,
    training: Option<TrainingSet>,
}

/// One code generation session.
pub struct CodeGeneration {
    target: TargetLanguage,
    embed_data: bool,
    class_name: String,
    renderer: Renderer,
    program: Program,
    state: SessionState,
    metadata: Box<dyn BuildMetadata>,
    model_loader: Box<dyn ModelLoader>,
    dataset_loader: Box<dyn DatasetLoader>,
}

impl CodeGeneration {
    /// Start a session for `target` with default rendering settings.
    pub fn new(target: TargetLanguage, metadata: Box<dyn BuildMetadata>) -> Result<Self, GenerationError> {
        Self::with_config(target, metadata, RenderConfig::default())
    }

    pub fn with_config(
        target: TargetLanguage,
        metadata: Box<dyn BuildMetadata>,
        config: RenderConfig,
    ) -> Result<Self, GenerationError> {
        let renderer = Renderer::for_target(target, &config)?;
        tracing::debug!(%target, variant = %renderer.variant(), "selected renderer");
        Ok(Self {
            target,
            embed_data: false,
            class_name: config.class_name,
            renderer,
            program: Program::new(),
            state: SessionState::Empty,
            metadata,
            model_loader: Box::new(JsonModelLoader),
            dataset_loader: Box::new(JsonDatasetLoader),
        })
    }

    pub fn with_model_loader(mut self, loader: Box<dyn ModelLoader>) -> Self {
        self.model_loader = loader;
        self
    }

    pub fn with_dataset_loader(mut self, loader: Box<dyn DatasetLoader>) -> Self {
        self.dataset_loader = loader;
        self
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Inline model parameters and training rows instead of loading them at runtime.
    pub fn set_embed_data(&mut self, embed_data: bool) {
        self.embed_data = embed_data;
    }

    pub fn embed_data(&self) -> bool {
        self.embed_data
    }

    pub fn target(&self) -> TargetLanguage {
        self.target
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Whether code generation supports `model`.
    pub fn is_supported(model: Option<&dyn MlMethod>) -> bool {
        model.is_some_and(|m| m.kind() == ModelKind::BasicNetwork)
    }

    /// Build and render a program for `model_file` and `data_file`, either of which may be absent.
    #[tracing::instrument(skip_all, fields(target = %self.target, embed = self.embed_data))]
    pub fn generate(&mut self, model_file: Option<&Path>, data_file: Option<&Path>) -> Result<(), GenerationError> {
        self.renderer.expect_variant(RendererVariant::Program, "generate")?;

        let inputs = self.read_inputs(model_file, data_file)?;
        self.build(model_file, data_file, inputs)?;
        if self.state == SessionState::Empty {
            self.state = SessionState::Built;
        }

        let renderer = self.renderer.as_program_mut("generate")?;
        renderer.generate(&self.program, self.embed_data)?;
        self.state = SessionState::Rendered;
        tracing::info!(bytes = self.renderer.contents().len(), "generated program");
        Ok(())
    }

    /// Generate from an analyst configuration.
    ///
    /// Program targets read the model and training files named by the configuration; template targets hand the
    /// configuration to the template.
    #[tracing::instrument(skip_all, fields(target = %self.target))]
    pub fn generate_from_analyst(&mut self, config: &dyn AnalystConfig) -> Result<(), GenerationError> {
        match self.renderer.variant() {
            RendererVariant::Program => {
                let model_file = resolve_configured_file(config, ML_CONFIG_MACHINE_LEARNING_FILE)?;
                let data_file = resolve_configured_file(config, ML_CONFIG_TRAINING_FILE)?;
                self.generate(model_file.as_deref(), data_file.as_deref())
            }
            RendererVariant::Template => {
                let renderer = self.renderer.as_template_mut("generate_from_analyst")?;
                renderer.generate(config, self.metadata.as_ref())?;
                self.state = SessionState::Rendered;
                tracing::info!(bytes = self.renderer.contents().len(), "filled template");
                Ok(())
            }
        }
    }

    /// Write the rendered document to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), GenerationError> {
        self.renderer.write_contents(path)?;
        tracing::info!(path = %path.display(), "wrote generated source");
        Ok(())
    }

    /// The rendered document; empty before a successful generate.
    pub fn save(&self) -> &str {
        self.renderer.contents()
    }

    fn read_inputs(&self, model_file: Option<&Path>, data_file: Option<&Path>) -> Result<Inputs, GenerationError> {
        if !self.embed_data {
            return Ok(Inputs {
                model: None,
                training: None,
            });
        }
        let model = model_file.map(|f| self.model_loader.load(f)).transpose()?;
        if let Some(m) = &model {
            if m.as_encodable().is_none() {
                return Err(GenerationError::UnsupportedModel { kind: m.kind() });
            }
        }
        let training = data_file.map(|f| self.dataset_loader.load(f)).transpose()?;
        Ok(Inputs { model, training })
    }

    fn build(&mut self, model_file: Option<&Path>, data_file: Option<&Path>, inputs: Inputs) -> Result<(), GenerationError> {
        let separate_training = self.renderer.supports_separate_training();

        self.program.add_top_comment(format!(
            "Code generated by {} v{}",
            self.metadata.tool_name(),
            self.metadata.version()
        ));
        self.program.add_top_comment(format!("Generation Date: {}", self.metadata.generated_at()));
        self.program.add_top_comment("Generated code may be used freely");
        self.program.add_top_comment(self.metadata.homepage());

        let class = self.program.create_class(self.class_name.clone());

        if let Some(data) = data_file {
            self.program.embed_training(class, data, inputs.training);
            if separate_training {
                self.program.generate_load_training(class, data);
            }
            self.program.generate_load_training(class, data);
        }

        let network = match model_file {
            Some(file) => Some(self.network_function(class, file, inputs.model.as_deref())?),
            None => None,
        };

        let main = self.program.create_main_function(class);
        if let Some(network) = network {
            self.program.create_function_call(main, network, METHOD_RESULT_TYPE, "method");
        }
        if data_file.is_some() && separate_training {
            self.program
                .create_function_call(main, LOAD_TRAINING_FUNCTION, DATASET_RESULT_TYPE, "training");
        }
        self.program.add_comment(main, MAIN_TRAILER);
        tracing::debug!(nodes = self.program.len(), "assembled program");
        Ok(())
    }

    fn network_function(
        &mut self,
        class: NodeId,
        file: &Path,
        model: Option<&dyn MlMethod>,
    ) -> Result<NodeId, GenerationError> {
        let weights = match model {
            Some(model) => Some(embed_weights(&mut self.program, class, model)?),
            None => None,
        };
        Ok(self.program.create_network_function(class, NETWORK_FUNCTION, file, weights))
    }
}

impl std::fmt::Debug for CodeGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGeneration")
            .field("target", &self.target)
            .field("embed_data", &self.embed_data)
            .field("class_name", &self.class_name)
            .field("state", &self.state)
            .field("nodes", &self.program.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::ir::NodeKind;
    use crate::metadata::FixedBuildMetadata;

    fn session(target: TargetLanguage) -> CodeGeneration {
        CodeGeneration::new(target, Box::new(FixedBuildMetadata::new("1.2.3", "Mon Jan 01 00:00:00 2024"))).unwrap()
    }

    fn member_names(generation: &CodeGeneration) -> Vec<String> {
        let program = generation.program();
        let class = program.classes().next().unwrap();
        program
            .children(class)
            .iter()
            .map(|&id| match &program.node(id).kind {
                NodeKind::EmbedTraining { .. } => "embed".to_string(),
                other => program
                    .function_name(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{other:?}")),
            })
            .collect()
    }

    #[test]
    fn test_no_generation_target() {
        let err = CodeGeneration::new(TargetLanguage::NoGeneration, Box::new(FixedBuildMetadata::new("1", "t")))
            .unwrap_err();
        assert!(matches!(err, GenerationError::Configuration));
    }

    #[test]
    fn test_empty_generate() {
        let mut generation = session(TargetLanguage::Java);
        generation.generate(None, None).unwrap();
        assert_eq!(generation.state(), SessionState::Rendered);
        assert_eq!(member_names(&generation), vec!["main"]);
        let program = generation.program();
        assert_eq!(program.top_comments().count(), 4);
        assert_eq!(
            program.top_comments().next(),
            Some("Code generated by mlgen v1.2.3")
        );
    }

    #[test]
    fn test_second_generate_appends() {
        let mut generation = session(TargetLanguage::Java);
        generation.generate(None, None).unwrap();
        generation.generate(None, None).unwrap();
        assert_eq!(generation.state(), SessionState::Rendered);
        assert_eq!(generation.program().classes().count(), 2);
        assert_eq!(generation.program().top_comments().count(), 8);

        let text = generation.save();
        assert_eq!(text.matches("public class ").count(), 2);
        assert_eq!(text.matches("// Code generated by mlgen v1.2.3").count(), 2);
        assert_eq!(text.matches("// Generation Date: ").count(), 2);
    }

    #[test]
    fn test_separate_training_duplicates_load() {
        let mut generation = session(TargetLanguage::CSharp);
        generation.generate(None, Some(Path::new("train.json"))).unwrap();
        assert_eq!(
            member_names(&generation),
            vec!["embed", "createTraining", "createTraining", "main"]
        );
    }

    #[test]
    fn test_javascript_single_load() {
        let mut generation = session(TargetLanguage::JavaScript);
        generation.generate(None, Some(Path::new("train.json"))).unwrap();
        assert_eq!(member_names(&generation), vec!["embed", "createTraining", "main"]);

        let program = generation.program();
        let class = program.classes().next().unwrap();
        let main = *program.children(class).last().unwrap();
        assert!(
            program
                .children(main)
                .iter()
                .all(|&id| !matches!(program.node(id).kind, NodeKind::FunctionCall { .. }))
        );
    }

    #[test]
    fn test_template_rejects_generate() {
        let mut generation = session(TargetLanguage::Mql4);
        let err = generation.generate(None, None).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRendererUse { .. }));
        assert!(generation.program().is_empty());
        assert_eq!(generation.state(), SessionState::Empty);
    }

    #[test]
    fn test_missing_model_file_leaves_program_untouched() {
        let mut generation = session(TargetLanguage::Java);
        generation.set_embed_data(true);
        let err = generation
            .generate(Some(Path::new("/definitely/not/here.json")), None)
            .unwrap_err();
        assert!(matches!(err, GenerationError::Model(_)));
        assert!(generation.program().is_empty());
        assert_eq!(generation.save(), "");
    }

    #[test]
    fn test_custom_class_name() {
        let mut generation = session(TargetLanguage::Java).with_class_name("Iris");
        generation.generate(None, None).unwrap();
        assert!(generation.save().contains("public class Iris {"));
    }

    #[test]
    fn test_is_supported() {
        use crate::model::{Activation, BasicNetwork, Layer, RbfNetwork};

        let net = BasicNetwork::new(
            vec![Layer {
                neurons: 1,
                bias: false,
                activation: Activation::Linear,
            }],
            vec![],
        );
        let rbf = RbfNetwork {
            input_count: 1,
            centers: vec![],
            widths: vec![],
            output_weights: vec![],
        };
        assert!(CodeGeneration::is_supported(Some(&net)));
        assert!(!CodeGeneration::is_supported(Some(&rbf)));
        assert!(!CodeGeneration::is_supported(None));
    }
}
