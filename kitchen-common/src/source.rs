//! Injected manifest loading

use async_trait::async_trait;
use std::rc::Rc;

use crate::manifest::{parse_manifest, ManifestItem};

/// Name of the command that (re)generates the manifest.
pub const GENERATE_COMMAND: &str = "cargo run -p kitchen-cli";

/// Why the manifest could not be obtained.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ManifestLoadError {
    #[error("manifest not found at {0}")]
    Missing(String),
    #[error("failed to read manifest: {0}")]
    Io(String),
    #[error("failed to fetch manifest: {0}")]
    Network(String),
    #[error("malformed manifest: {0}")]
    Malformed(String),
}

impl ManifestLoadError {
    /// User-facing message that names the generation step to re-run.
    pub fn remediation(&self) -> String {
        format!("Failed to load component manifest. Did you run \"{GENERATE_COMMAND}\"?")
    }
}

/// Parse raw manifest bytes, mapping failures into [`ManifestLoadError`].
pub fn decode_manifest(bytes: &[u8]) -> Result<Vec<ManifestItem>, ManifestLoadError> {
    parse_manifest(bytes).map_err(|e| ManifestLoadError::Malformed(e.to_string()))
}

/// Something that can produce the generated manifest.
///
/// The UI is single-threaded, so implementations are not required to be `Send`.
#[async_trait(?Send)]
pub trait ManifestSource {
    async fn load(&self) -> Result<Vec<ManifestItem>, ManifestLoadError>;
}

/// Shared handle to a manifest source, cheap to clone into components.
#[derive(Clone)]
pub struct ManifestLoader(Rc<dyn ManifestSource>);

impl ManifestLoader {
    pub fn new(source: impl ManifestSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub async fn load(&self) -> Result<Vec<ManifestItem>, ManifestLoadError> {
        self.0.load().await
    }
}

impl PartialEq for ManifestLoader {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fixed in-memory manifest, for tests and previews.
#[derive(Clone, Debug)]
pub struct StaticManifestSource(pub Result<Vec<ManifestItem>, ManifestLoadError>);

#[async_trait(?Send)]
impl ManifestSource for StaticManifestSource {
    async fn load(&self) -> Result<Vec<ManifestItem>, ManifestLoadError> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn loader_delegates_to_source() {
        let items = vec![ManifestItem::from_name("Foo")];
        let loader = ManifestLoader::new(StaticManifestSource(Ok(items.clone())));
        assert_eq!(block_on(loader.load()), Ok(items));
    }

    #[test]
    fn loader_surfaces_rejection() {
        let err = ManifestLoadError::Missing("manifest.json".into());
        let loader = ManifestLoader::new(StaticManifestSource(Err(err.clone())));
        assert_eq!(block_on(loader.load()), Err(err));
    }

    #[test]
    fn loader_equality_is_identity() {
        let a = ManifestLoader::new(StaticManifestSource(Ok(vec![])));
        let b = ManifestLoader::new(StaticManifestSource(Ok(vec![])));
        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn remediation_names_generation_step() {
        let err = ManifestLoadError::Malformed("eof".into());
        assert!(err.remediation().contains(GENERATE_COMMAND));
    }

    #[test]
    fn decode_maps_parse_failure() {
        assert!(matches!(
            decode_manifest(b"[{"),
            Err(ManifestLoadError::Malformed(_))
        ));
        assert_eq!(decode_manifest(b"[]"), Ok(vec![]));
    }
}
