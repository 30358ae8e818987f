//! Radial basis function network.

use serde::{Deserialize, Serialize};

use super::{Encodable, MlMethod, ModelKind};

/// Gaussian RBF network: one hidden layer of centers, linear output weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbfNetwork {
    pub input_count: usize,
    pub centers: Vec<Vec<f64>>,
    pub widths: Vec<f64>,
    pub output_weights: Vec<f64>,
}

impl MlMethod for RbfNetwork {
    fn kind(&self) -> ModelKind {
        ModelKind::RbfNetwork
    }

    fn as_encodable(&self) -> Option<&dyn Encodable> {
        Some(self)
    }
}

impl Encodable for RbfNetwork {
    fn encoded_len(&self) -> usize {
        self.centers.iter().map(Vec::len).sum::<usize>() + self.widths.len() + self.output_weights.len()
    }

    /// Layout: centers row by row, then widths, then output weights.
    fn encode_to(&self, buf: &mut [f64]) {
        let values = self
            .centers
            .iter()
            .flatten()
            .chain(self.widths.iter())
            .chain(self.output_weights.iter());
        for (slot, value) in buf.iter_mut().zip(values) {
            *slot = *value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let rbf = RbfNetwork {
            input_count: 2,
            centers: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            widths: vec![0.5, 0.25],
            output_weights: vec![9.0],
        };
        assert_eq!(rbf.encoded_len(), 7);
        let mut buf = vec![0.0; rbf.encoded_len()];
        rbf.encode_to(&mut buf);
        assert_eq!(buf, vec![1.0, 2.0, 3.0, 4.0, 0.5, 0.25, 9.0]);
    }
}
