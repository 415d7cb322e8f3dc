//! Read-only content store backed by a directory on disk.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use tokio::fs;
use tracing::warn;

/// One file loaded from the store.
pub struct StoredFile {
    pub bytes: Vec<u8>,
    pub modified: SystemTime,
}

/// Hands out files from a single root directory.
///
/// Names are plain relative paths; anything with `..`, a leading `/`, or
/// other non-normal components is refused so a request can never read
/// outside the root.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads `name` from the root, or `None` when it is absent or refused.
    ///
    /// A missing file is the expected miss case and stays quiet; refused
    /// names and read failures are logged.
    pub async fn load(&self, name: &str) -> Option<StoredFile> {
        if !is_plain_relative(name) {
            warn!(file = name, "Rejected content name escaping the root");
            return None;
        }

        let path = self.root.join(name);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(file = name, error = %err, "Failed to read content file");
                return None;
            }
        };

        let modified = fs::metadata(&path)
            .await
            .ok()
            .and_then(|meta| meta.modified().ok())
            .unwrap_or_else(SystemTime::now);

        Some(StoredFile { bytes, modified })
    }
}

fn is_plain_relative(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|part| matches!(part, Component::Normal(_)))
}
