use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod descriptions;
mod error;
mod labels;
mod model;
mod preprocess;
mod render;
mod routes;
mod state;
mod uploads;
mod utils;

use config::Config;
use labels::ClassLabels;
use preprocess::Preprocessor;
use render::Renderer;
use state::AppState;
use uploads::UploadStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    let config = Config::from_env()?;
    info!("Leaf disease service v{}", env!("CARGO_PKG_VERSION"));
    info!("  Model:    {:?}", config.model.path);
    info!("  Dataset:  {:?}", config.class_list_path.as_ref().unwrap_or(&config.dataset_path));
    info!("  Uploads:  {:?}", config.upload_dir);

    utils::ensure_model_exists(&config.model).await?;

    let labels = match &config.class_list_path {
        Some(path) => ClassLabels::from_class_list(path),
        None => ClassLabels::from_dataset_dir(&config.dataset_path),
    }
    .context("Failed to load class labels")?;
    // the label order is assumed, not checked, to match the model's output order
    info!(classes = labels.len(), "loaded class labels");

    let classifier = model::load(&config.model).context("Failed to load model")?;

    let uploads = UploadStore::open(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.upload_dir.display()))?;
    if let Some(retention) = config.upload_retention {
        uploads::spawn_retention_sweep(uploads.clone(), retention);
    }

    let state = Arc::new(AppState {
        classifier,
        preprocessor: Preprocessor::new(config.model.image_size, config.model.layout),
        labels,
        uploads,
        renderer: Renderer::new().context("Failed to load templates")?,
    });

    let app = routes::router(state, config.body_limit_bytes);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    info!("Listening on http://{}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
