use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::ModelError;

/// The request carried no usable file.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file uploaded!")]
    NoFileUploaded,
    #[error("No file selected!")]
    NoFileSelected,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("{}", multipart_message(.0))]
    Multipart(#[from] MultipartError),
    #[error("could not read the uploaded image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("model predicted class {index} but only {count} labels are known")]
    UnknownClass { index: usize, count: usize },
    #[error("inference task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Multipart(err) => err.status(),
            AppError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_)
            | AppError::Model(_)
            | AppError::UnknownClass { .. }
            | AppError::Task(_)
            | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn multipart_message(err: &MultipartError) -> String {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        format!("upload is larger than the allowed request size: {}", err.body_text())
    } else {
        format!("invalid multipart body: {}", err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_keep_their_user_facing_text() {
        assert_eq!(AppError::from(UploadError::NoFileUploaded).to_string(), "No file uploaded!");
        assert_eq!(AppError::from(UploadError::NoFileSelected).to_string(), "No file selected!");
    }

    #[test]
    fn client_and_server_failures_are_told_apart() {
        assert_eq!(AppError::from(UploadError::NoFileSelected).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::UnknownClass { index: 4, count: 3 }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Model(ModelError::EmptyScores).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
