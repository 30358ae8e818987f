//! Support vector machine.

use serde::{Deserialize, Serialize};

use super::{MlMethod, ModelKind};

/// Kernel SVM described by its support vectors. Not encodable: the vector count varies per trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportVectorMachine {
    pub input_count: usize,
    pub support_vectors: Vec<Vec<f64>>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub bias: f64,
}

impl MlMethod for SupportVectorMachine {
    fn kind(&self) -> ModelKind {
        ModelKind::SupportVectorMachine
    }
}
