//! End-to-end generation tests
//!
//! Models and training sets are written as JSON into scratch directories and
//! read back through the default loaders.

use std::fs;
use std::path::{Path, PathBuf};

use mlgen::backend::generation::SessionState;
use mlgen::backend::{CodeGeneration, GenerationError};
use mlgen::metadata::FixedBuildMetadata;
use mlgen::model::{Activation, BasicNetwork, Layer, SupportVectorMachine};
use mlgen::{RendererVariant, TargetLanguage};
use tempfile::TempDir;

const NETWORK_JSON: &str = r#"{
    "kind": "basic_network",
    "layers": [
        {"neurons": 2, "bias": true, "activation": "linear"},
        {"neurons": 3, "bias": true, "activation": "tanh"},
        {"neurons": 1}
    ],
    "weights": [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3]
}"#;

const SVM_JSON: &str = r#"{
    "kind": "svm",
    "input_count": 2,
    "support_vectors": [[0.0, 1.0]],
    "coefficients": [0.5],
    "bias": 0.1
}"#;

const TRAINING_JSON: &str = r#"{"input": [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]], "ideal": [[0.0], [1.0], [1.0], [0.0]]}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn network(&self) -> PathBuf {
        self.write("net.json", NETWORK_JSON)
    }

    fn training(&self) -> PathBuf {
        self.write("train.json", TRAINING_JSON)
    }
}

fn session(target: TargetLanguage, embed: bool) -> CodeGeneration {
    let metadata = FixedBuildMetadata::new("0.0.1", "Mon Jan 01 00:00:00 2024");
    let mut generation = CodeGeneration::new(target, Box::new(metadata)).unwrap();
    generation.set_embed_data(embed);
    generation
}

fn generate(target: TargetLanguage, embed: bool, model: Option<&Path>, data: Option<&Path>) -> String {
    let mut generation = session(target, embed);
    generation.generate(model, data).unwrap();
    generation.save().to_string()
}

/// Number of values inside the `WEIGHTS` literal of Java output.
fn java_weight_count(source: &str) -> usize {
    let start = source.find("double[] WEIGHTS = {").expect("no WEIGHTS array") + "double[] WEIGHTS = {".len();
    let end = start + source[start..].find("};").expect("unterminated WEIGHTS array");
    source[start..end].split(',').filter(|v| !v.trim().is_empty()).count()
}

// ============================================================================
// Renderer selection
// ============================================================================

#[test]
fn test_target_variant_table() {
    let expected = [
        (TargetLanguage::Java, RendererVariant::Program),
        (TargetLanguage::CSharp, RendererVariant::Program),
        (TargetLanguage::JavaScript, RendererVariant::Program),
        (TargetLanguage::Mql4, RendererVariant::Template),
        (TargetLanguage::NinjaScript, RendererVariant::Template),
    ];
    for (target, variant) in expected {
        assert_eq!(session(target, false).renderer().variant(), variant, "{target:?}");
    }
}

#[test]
fn test_no_generation_is_configuration_error() {
    let metadata = FixedBuildMetadata::new("0.0.1", "now");
    let err = CodeGeneration::new(TargetLanguage::NoGeneration, Box::new(metadata)).unwrap_err();
    assert!(matches!(err, GenerationError::Configuration));
}

// ============================================================================
// Program generation
// ============================================================================

#[test]
fn test_empty_generate_has_header_class_and_main() {
    let java = generate(TargetLanguage::Java, false, None, None);
    assert!(java.starts_with("// Code generated by mlgen v0.0.1\n// Generation Date: Mon Jan 01 00:00:00 2024\n"));
    assert!(java.contains("public class MlgenExample {"));
    assert!(java.contains("public static void main(String[] args) {"));
    assert!(!java.contains("createNetwork"));
    assert!(!java.contains("createTraining"));
    assert!(java.contains("// Network and/or data is now loaded, you can add code to train, evaluate, etc."));
}

#[test]
fn test_embedded_weights_match_parameter_count() {
    let fixture = Fixture::new();
    let java = generate(TargetLanguage::Java, true, Some(&fixture.network()), None);
    assert_eq!(java_weight_count(&java), 13);
    assert!(java.contains("ModelIO.decodeFromArray(network, WEIGHTS);"));
    assert!(java.contains("MLMethod method = createNetwork();"));
}

#[test]
fn test_without_embedding_model_is_loaded_from_file() {
    let fixture = Fixture::new();
    let model = fixture.network();
    let java = generate(TargetLanguage::Java, false, Some(&model), None);
    assert!(!java.contains("WEIGHTS"));
    assert!(java.contains(&format!("ModelIO.loadMethod(new File(\"{}\"))", model.display())));
}

#[test]
fn test_separate_training_emits_load_twice() {
    let fixture = Fixture::new();
    let java = generate(TargetLanguage::Java, false, None, Some(&fixture.training()));
    assert_eq!(java.matches("public static MLDataSet createTraining() {").count(), 2);
    assert_eq!(java.matches("ModelIO.loadTraining(").count(), 2);
    assert_eq!(java.matches("MLDataSet training = createTraining();").count(), 1);
}

#[test]
fn test_javascript_loads_training_once_and_never_calls_it() {
    let fixture = Fixture::new();
    let js = generate(TargetLanguage::JavaScript, false, None, Some(&fixture.training()));
    assert_eq!(js.matches("function createTraining() {").count(), 1);
    assert_eq!(js.matches("mlgen.loadTraining(").count(), 1);
    assert!(!js.contains("= createTraining();"));
}

#[test]
fn test_embedded_training_rows() {
    let fixture = Fixture::new();
    let csharp = generate(TargetLanguage::CSharp, true, None, Some(&fixture.training()));
    assert!(csharp.contains("public static readonly double[][] INPUT_DATA = {"));
    assert_eq!(csharp.matches("new double[] { ").count(), 8);
    assert!(csharp.contains("MLDataSet training = ModelIO.DataSet(INPUT_DATA, IDEAL_DATA);"));
    assert!(!csharp.contains("ModelIO.LoadTraining("));
}

#[test]
fn test_unencodable_model_is_rejected_before_building() {
    let fixture = Fixture::new();
    let svm = fixture.write("svm.json", SVM_JSON);
    let mut generation = session(TargetLanguage::Java, true);
    let err = generation.generate(Some(&svm), None).unwrap_err();
    assert!(matches!(err, GenerationError::UnsupportedModel { .. }));
    assert!(generation.program().is_empty());
    assert_eq!(generation.state(), SessionState::Empty);
}

#[test]
fn test_malformed_model_file() {
    let fixture = Fixture::new();
    let broken = fixture.write("broken.json", "{\"kind\": \"basic_network\"");
    let mut generation = session(TargetLanguage::CSharp, true);
    assert!(matches!(
        generation.generate(Some(&broken), None),
        Err(GenerationError::Model(_))
    ));
}

#[test]
fn test_template_target_rejects_generate() {
    let mut generation = session(TargetLanguage::NinjaScript, false);
    assert!(matches!(
        generation.generate(None, None),
        Err(GenerationError::InvalidRendererUse {
            expected: RendererVariant::Program,
            actual: RendererVariant::Template,
            ..
        })
    ));
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_save_to_matches_save() {
    let fixture = Fixture::new();
    let mut generation = session(TargetLanguage::JavaScript, true);
    generation
        .generate(Some(&fixture.network()), Some(&fixture.training()))
        .unwrap();
    let out = fixture.dir.path().join("Example.js");
    generation.save_to(&out).unwrap();
    assert_eq!(fs::read(&out).unwrap(), generation.save().as_bytes());
}

#[test]
fn test_save_before_generate_is_empty() {
    let generation = session(TargetLanguage::Java, false);
    assert_eq!(generation.save(), "");
    assert_eq!(generation.state(), SessionState::Empty);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let fixture = Fixture::new();
    let mut generation = session(TargetLanguage::Java, false);
    generation.generate(None, None).unwrap();
    let out = fixture.dir.path().join("missing").join("Example.java");
    assert!(matches!(generation.save_to(&out), Err(GenerationError::Write { .. })));
}

#[test]
fn test_is_supported() {
    let net = BasicNetwork::new(
        vec![Layer {
            neurons: 1,
            bias: false,
            activation: Activation::Sigmoid,
        }],
        vec![],
    );
    let svm = SupportVectorMachine {
        input_count: 1,
        support_vectors: vec![],
        coefficients: vec![],
        bias: 0.0,
    };
    assert!(CodeGeneration::is_supported(Some(&net)));
    assert!(!CodeGeneration::is_supported(Some(&svm)));
    assert!(!CodeGeneration::is_supported(None));
}
