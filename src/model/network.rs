//! Feed-forward neural network.

use serde::{Deserialize, Serialize};

use super::{Encodable, MlMethod, ModelKind};

/// Neuron activation function of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Linear,
    Sigmoid,
    Tanh,
    Relu,
}

/// One layer of a [`BasicNetwork`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: usize,
    /// Whether this layer feeds a bias neuron into the next layer.
    #[serde(default)]
    pub bias: bool,
    #[serde(default = "default_activation")]
    pub activation: Activation,
}

fn default_activation() -> Activation {
    Activation::Sigmoid
}

/// A fully connected feed-forward network.
///
/// Weights are stored flat, layer pair by layer pair: for each consecutive `(from, to)` pair,
/// `(from.neurons + from.bias) * to.neurons` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicNetwork {
    pub layers: Vec<Layer>,
    pub weights: Vec<f64>,
}

impl BasicNetwork {
    pub fn new(layers: Vec<Layer>, weights: Vec<f64>) -> Self {
        Self { layers, weights }
    }

    /// Weight count implied by the layer structure, `None` if it does not fit in `usize`.
    pub fn expected_weight_count(&self) -> Option<usize> {
        self.layers.windows(2).try_fold(0usize, |total, pair| {
            let fan_in = pair[0].neurons.checked_add(usize::from(pair[0].bias))?;
            total.checked_add(fan_in.checked_mul(pair[1].neurons)?)
        })
    }

    pub fn input_count(&self) -> usize {
        self.layers.first().map(|l| l.neurons).unwrap_or(0)
    }

    pub fn output_count(&self) -> usize {
        self.layers.last().map(|l| l.neurons).unwrap_or(0)
    }
}

impl MlMethod for BasicNetwork {
    fn kind(&self) -> ModelKind {
        ModelKind::BasicNetwork
    }

    fn as_encodable(&self) -> Option<&dyn Encodable> {
        Some(self)
    }
}

impl Encodable for BasicNetwork {
    fn encoded_len(&self) -> usize {
        self.weights.len()
    }

    fn encode_to(&self, buf: &mut [f64]) {
        buf.copy_from_slice(&self.weights);
    }
}
