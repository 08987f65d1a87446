use std::{env, path::Path};

use anyhow::{bail, Context};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::info;

use crate::config::ModelConfig;

async fn download_file(url: &str, path: &Path) -> anyhow::Result<()> {
    info!("Downloading {} from {}", path.display(), url);

    let mut header_map = HeaderMap::new();

    if let Ok(token) = env::var("GITHUB_TOKEN") {
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .context("Invalid GITHUB_TOKEN format")?;
        header_map.insert(AUTHORIZATION, auth_value);
    }
    header_map.insert(ACCEPT, HeaderValue::from_static("application/octet-stream"));

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .headers(header_map)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?;

    if !response.status().is_success() {
        bail!("Failed to download {}: {}", url, response.status());
    }

    let bytes = response.bytes().await.context("Failed to read bytes")?;
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Fetches the model from `MODEL_URL` when it is not on disk yet.
pub async fn ensure_model_exists(model: &ModelConfig) -> anyhow::Result<()> {
    info!("Checking model...");
    if model.path.exists() {
        return Ok(());
    }

    match &model.url {
        Some(url) => download_file(url, &model.path).await,
        None => bail!(
            "model file {} is missing and MODEL_URL is not set",
            model.path.display()
        ),
    }
}
