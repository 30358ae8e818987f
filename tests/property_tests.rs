//! Property-based tests for code generation
//!
//! These tests use proptest to verify invariants across many randomly
//! generated models and training sets.

use mlgen::backend::embed::{WEIGHTS_ARRAY, embed_weights};
use mlgen::backend::ir::{NodeKind, Program};
use mlgen::backend::render::fill_template;
use mlgen::model::{Activation, BasicNetwork, Layer};
use proptest::prelude::*;

fn layer_sizes() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((1usize..6, any::<bool>()), 2..5)
}

fn network(sizes: &[(usize, bool)], seed: f64) -> BasicNetwork {
    let layers: Vec<Layer> = sizes
        .iter()
        .map(|&(neurons, bias)| Layer {
            neurons,
            bias,
            activation: Activation::Tanh,
        })
        .collect();
    let mut net = BasicNetwork::new(layers, vec![]);
    let count = net.expected_weight_count().unwrap();
    net.weights = (0..count).map(|i| seed * i as f64).collect();
    net
}

proptest! {
    /// Property: the WEIGHTS literal holds exactly the model's parameters, in order
    #[test]
    fn weights_array_matches_encoding(sizes in layer_sizes(), seed in -10.0f64..10.0) {
        let net = network(&sizes, seed);
        let mut program = Program::new();
        let class = program.create_class("Demo");
        let id = embed_weights(&mut program, class, &net).unwrap();

        match &program.node(id).kind {
            NodeKind::ArrayLiteral { name, data } => {
                prop_assert_eq!(name.as_str(), WEIGHTS_ARRAY);
                prop_assert_eq!(Some(data.len()), net.expected_weight_count());
                prop_assert_eq!(data, &net.weights);
            }
            other => prop_assert!(false, "expected array literal, got {:?}", other),
        }
    }

    /// Property: text without placeholders passes through unchanged
    #[test]
    fn fill_template_is_identity_without_placeholders(text in "[a-zA-Z0-9 {}\n]*") {
        prop_assume!(!text.contains("{{"));
        prop_assert_eq!(fill_template(&text, |_| Some("x".to_string())), text);
    }
}
