use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::{fs, task::JoinHandle};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A file written by [`UploadStore::save`].
#[derive(Clone, Debug)]
pub struct StoredUpload {
    pub filename: String,
    pub path: PathBuf,
}

impl StoredUpload {
    /// Where the file is served back from.
    pub fn url(&self) -> String {
        format!("/uploads/{}", self.filename)
    }
}

#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub async fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(UploadStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `bytes` under a fresh random name.
    pub async fn save(&self, bytes: &[u8]) -> io::Result<StoredUpload> {
        // the directory may have been removed while the server was running
        fs::create_dir_all(&self.dir).await?;

        let filename = format!("{}.jpg", Uuid::new_v4());
        let path = self.dir.join(&filename);
        fs::write(&path, bytes).await?;
        debug!(%filename, size = bytes.len(), "stored upload");

        Ok(StoredUpload { filename, path })
    }

    /// Best effort removal of an upload that turned out to be unusable.
    pub async fn discard(&self, upload: &StoredUpload) {
        if let Err(err) = fs::remove_file(&upload.path).await {
            warn!(filename = %upload.filename, "failed to remove upload: {}", err);
        }
    }

    /// Deletes every stored file last modified at least `retention` ago.
    pub async fn sweep(&self, retention: Duration) -> io::Result<usize> {
        let mut removed = 0;
        let mut entries = fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let expired = metadata
                .modified()
                .ok()
                .and_then(|modified| modified.elapsed().ok())
                .map_or(false, |age| age >= retention);

            if expired {
                match fs::remove_file(entry.path()).await {
                    Ok(()) => removed += 1,
                    // a concurrent sweep or manual cleanup got there first
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(removed)
    }
}

/// Periodically removes uploads older than `retention`.
pub fn spawn_retention_sweep(store: UploadStore, retention: Duration) -> JoinHandle<()> {
    let period = (retention / 2).max(Duration::from_secs(1));
    info!(
        retention_secs = retention.as_secs(),
        period_secs = period.as_secs(),
        "upload retention sweep enabled"
    );

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            match store.sweep(retention).await {
                Ok(0) => {}
                Ok(removed) => info!(removed, "swept expired uploads"),
                Err(err) => warn!("upload sweep failed: {}", err),
            }
        }
    })
}
