//! Manifest source backed by the local filesystem

use async_trait::async_trait;
use kitchen_common::{decode_manifest, ManifestItem, ManifestLoadError, ManifestSource};
use std::path::PathBuf;
use tracing::debug;

/// Reads the generated manifest straight from disk.
#[derive(Clone, Debug)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl ManifestSource for FileManifestSource {
    async fn load(&self) -> Result<Vec<ManifestItem>, ManifestLoadError> {
        debug!("Loading manifest from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestLoadError::Missing(self.path.display().to_string())
            } else {
                ManifestLoadError::Io(e.to_string())
            }
        })?;
        decode_manifest(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_is_reported_as_missing() {
        let dir = TempDir::new().unwrap();
        let source = FileManifestSource::new(dir.path().join("manifest.json"));
        assert!(matches!(
            source.load().await,
            Err(ManifestLoadError::Missing(_))
        ));
    }

    #[tokio::test]
    async fn malformed_file_is_reported_as_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "[{\"name\": 1}]").unwrap();
        assert!(matches!(
            FileManifestSource::new(path).load().await,
            Err(ManifestLoadError::Malformed(_))
        ));
    }
}
