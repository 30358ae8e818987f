//! Weight embedding: inline a model's parameters as a literal array.

use super::errors::GenerationError;
use super::ir::{NodeId, Program};
use crate::model::MlMethod;

/// Name of the array literal holding embedded model parameters.
pub const WEIGHTS_ARRAY: &str = "WEIGHTS";

/// Append a [`WEIGHTS_ARRAY`] literal with every encoded parameter of `model` to `class`.
///
/// The encodable capability is checked first, so an unsupported model leaves `program` untouched.
#[tracing::instrument(skip_all, fields(kind = %model.kind()))]
pub fn embed_weights(program: &mut Program, class: NodeId, model: &dyn MlMethod) -> Result<NodeId, GenerationError> {
    let encodable = model
        .as_encodable()
        .ok_or(GenerationError::UnsupportedModel { kind: model.kind() })?;

    let mut weights = vec![0.0; encodable.encoded_len()];
    encodable.encode_to(&mut weights);
    tracing::debug!(count = weights.len(), "embedding model parameters");

    Ok(program.create_array(class, WEIGHTS_ARRAY, weights))
}
