use std::{path::Path, sync::Arc};

use serde::Serialize;

use crate::{
    error::AppError,
    labels::{argmax, ClassLabels},
    model::{Classifier, ModelError},
    preprocess::Preprocessor,
    render::Renderer,
    uploads::UploadStore,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    pub label: String,
    pub description: String,
    pub image_url: String,
}

pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub preprocessor: Preprocessor,
    pub labels: ClassLabels,
    pub uploads: UploadStore,
    pub renderer: Renderer,
}

impl AppState {
    /// Blocking: decoding and inference are CPU bound.
    pub fn classify_file(&self, path: &Path) -> Result<String, AppError> {
        let input = self.preprocessor.load(path).map_err(AppError::Decode)?;
        let scores = self.classifier.scores(&input)?;
        let index = argmax(&scores).ok_or(ModelError::EmptyScores)?;

        self.labels
            .get(index)
            .map(str::to_owned)
            .ok_or_else(|| AppError::UnknownClass {
                index,
                count: self.labels.len(),
            })
    }
}

pub type SharedState = Arc<AppState>;
