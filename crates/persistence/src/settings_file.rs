//! File-backed settings document store.
//!
//! Each document lives at `<directory>/<name>.json`. Operators edit these
//! files between restarts; the configurator only ever creates missing ones,
//! and a created document appears complete or not at all.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use domain::store::{SettingsStore, StoreError};
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Settings store over a directory of JSON documents.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    directory: PathBuf,
}

impl FileSettingsStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the document stored under `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.json", name))
    }

    /// Scratch file a default document is written to before it is published.
    fn staging_path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!(".{}.json.{}.tmp", name, std::process::id()))
    }
}

fn io_error(name: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        name: name.to_string(),
        source,
    }
}

fn json_error(name: &str, source: serde_json::Error) -> StoreError {
    StoreError::Json {
        name: name.to_string(),
        source,
    }
}

/// Write `content` to `staging`, then link it into place at `path`.
///
/// The link fails if `path` already exists, so a document is either absent
/// or complete; an interrupted write never leaves a partial one behind.
async fn publish(staging: &Path, path: &Path, content: &[u8]) -> std::io::Result<bool> {
    let mut file = fs::File::create(staging).await?;
    file.write_all(content).await?;
    file.sync_all().await?;
    drop(file);

    match fs::hard_link(staging, path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

#[async_trait::async_trait]
impl SettingsStore for FileSettingsStore {
    async fn create_default(&self, name: &str, value: &Value) -> Result<bool, StoreError> {
        let path = self.path_for(name);
        if fs::try_exists(&path).await.map_err(|e| io_error(name, e))? {
            return Ok(false);
        }

        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| io_error(name, e))?;

        let mut content = serde_json::to_vec_pretty(value).map_err(|e| json_error(name, e))?;
        content.push(b'\n');

        let staging = self.staging_path_for(name);
        let published = publish(&staging, &path, &content).await;
        if let Err(e) = fs::remove_file(&staging).await {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %staging.display(), error = %e, "Failed to remove staging file");
            }
        }

        let created = published.map_err(|e| io_error(name, e))?;
        if created {
            debug!(path = %path.display(), "Wrote default settings document");
        }
        Ok(created)
    }

    async fn read(&self, name: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(name);
        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(name, e)),
        };

        let value = serde_json::from_slice(&content).map_err(|e| json_error(name, e))?;
        Ok(Some(value))
    }
}
