#[cfg(feature = "tensorflow")]
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::{config::ModelConfig, preprocess::InputTensor};

#[derive(Debug, Error)]
pub enum ModelError {
    #[cfg(feature = "tensorflow")]
    #[error("failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "tensorflow")]
    #[error("tensorflow: {0}")]
    Tensorflow(#[from] tensorflow::Status),
    #[error("model returned no usable scores")]
    EmptyScores,
    #[error("built without a model backend, enable the `tensorflow` feature")]
    BackendDisabled,
}

/// A frozen scoring function: one input batch in, one score per class out.
pub trait Classifier: Send + Sync {
    fn scores(&self, input: &InputTensor) -> Result<Vec<f32>, ModelError>;
}

#[cfg(feature = "tensorflow")]
pub fn load(config: &ModelConfig) -> Result<Arc<dyn Classifier>, ModelError> {
    Ok(Arc::new(frozen_graph::FrozenGraph::load(config)?))
}

#[cfg(not(feature = "tensorflow"))]
pub fn load(_config: &ModelConfig) -> Result<Arc<dyn Classifier>, ModelError> {
    Err(ModelError::BackendDisabled)
}

#[cfg(feature = "tensorflow")]
mod frozen_graph {
    use tensorflow::{Graph, ImportGraphDefOptions, Session, SessionOptions, SessionRunArgs, Tensor};
    use tracing::info;

    use super::{Classifier, ModelError};
    use crate::{config::ModelConfig, preprocess::InputTensor};

    /// A TensorFlow graph exported with its variables folded into constants.
    pub struct FrozenGraph {
        session: Session,
        graph: Graph,
        input_op: String,
        output_op: String,
    }

    impl FrozenGraph {
        pub fn load(config: &ModelConfig) -> Result<Self, ModelError> {
            let model_bytes = std::fs::read(&config.path).map_err(|source| ModelError::Read {
                path: config.path.clone(),
                source,
            })?;

            let mut graph = Graph::new();
            graph.import_graph_def(&model_bytes, &ImportGraphDefOptions::new())?;

            // fail at startup rather than on the first request
            graph.operation_by_name_required(&config.input_op)?;
            graph.operation_by_name_required(&config.output_op)?;

            let session = Session::new(&SessionOptions::new(), &graph)?;
            info!(
                path = %config.path.display(),
                input = %config.input_op,
                output = %config.output_op,
                "loaded frozen graph"
            );

            Ok(FrozenGraph {
                session,
                graph,
                input_op: config.input_op.clone(),
                output_op: config.output_op.clone(),
            })
        }
    }

    impl Classifier for FrozenGraph {
        fn scores(&self, input: &InputTensor) -> Result<Vec<f32>, ModelError> {
            let input_tensor = Tensor::<f32>::new(&input.shape).with_values(&input.data)?;

            let input_operation = self.graph.operation_by_name_required(&self.input_op)?;
            let output_operation = self.graph.operation_by_name_required(&self.output_op)?;

            let mut args = SessionRunArgs::new();
            args.add_feed(&input_operation, 0, &input_tensor);
            let output_token = args.request_fetch(&output_operation, 0);
            self.session.run(&mut args)?;

            let output_tensor: Tensor<f32> = args.fetch(output_token)?;
            Ok(output_tensor.to_vec())
        }
    }
}
