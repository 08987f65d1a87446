use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::{
    descriptions::describe,
    error::{AppError, UploadError},
    render::PageView,
    state::{PredictionResult, SharedState},
};

pub fn router(state: SharedState, body_limit_bytes: usize) -> Router {
    let uploads = ServeDir::new(state.uploads.dir());

    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/health", get(health_check))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// How the caller wants results presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    fn from_headers(headers: &HeaderMap) -> Self {
        let wants_json = headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |accept| accept.contains("application/json"));

        if wants_json {
            ResponseFormat::Json
        } else {
            ResponseFormat::Html
        }
    }
}

async fn index(State(state): State<SharedState>) -> Response {
    render_page(&state, &PageView::default(), StatusCode::OK)
}

async fn predict(
    State(state): State<SharedState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let result = classify_upload(&state, multipart).await;

    match &result {
        Ok(prediction) => info!(
            label = %prediction.label,
            image = %prediction.image_url,
            "prediction served"
        ),
        Err(err) if err.status().is_server_error() => error!("prediction failed: {}", err),
        Err(err) => warn!("prediction rejected: {}", err),
    }

    match (ResponseFormat::from_headers(&headers), result) {
        (ResponseFormat::Json, Ok(prediction)) => Json(prediction).into_response(),
        (ResponseFormat::Json, Err(err)) => err.into_response(),
        (ResponseFormat::Html, Ok(prediction)) => render_page(
            &state,
            &PageView {
                prediction: Some(&prediction),
                error: None,
            },
            StatusCode::OK,
        ),
        (ResponseFormat::Html, Err(err)) => {
            let message = err.to_string();
            render_page(
                &state,
                &PageView {
                    prediction: None,
                    error: Some(&message),
                },
                err.status(),
            )
        }
    }
}

async fn health_check(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "classes": state.labels.len(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn classify_upload(
    state: &SharedState,
    multipart: Multipart,
) -> Result<PredictionResult, AppError> {
    let image_data = read_file_field(multipart).await?;
    let upload = state.uploads.save(&image_data).await?;

    let worker = Arc::clone(state);
    let path = upload.path.clone();
    let label = match tokio::task::spawn_blocking(move || worker.classify_file(&path)).await? {
        Ok(label) => label,
        Err(err @ AppError::Decode(_)) => {
            state.uploads.discard(&upload).await;
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    Ok(PredictionResult {
        description: describe(&label).to_string(),
        label,
        image_url: upload.url(),
    })
}

/// Pulls the bytes of the `file` field out of the form.
///
/// A `file` part without a filename is a plain form value, not an upload, and
/// is skipped. An empty filename is what browsers send when nothing was picked.
async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        match field.file_name().map(str::is_empty) {
            None => continue,
            Some(true) => return Err(UploadError::NoFileSelected.into()),
            Some(false) => return Ok(field.bytes().await?),
        }
    }

    Err(UploadError::NoFileUploaded.into())
}

fn render_page(state: &SharedState, view: &PageView<'_>, status: StatusCode) -> Response {
    match state.renderer.page(view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("failed to render page: {}", err);
            AppError::from(err).into_response()
        }
    }
}
