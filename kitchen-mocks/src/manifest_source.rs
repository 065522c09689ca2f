//! Manifest fetched from the dev server

use async_trait::async_trait;
use kitchen_common::{decode_manifest, ManifestItem, ManifestLoadError, ManifestSource};
use tracing::{debug, warn};

/// Path the generated manifest is served under (`public/` is the web root)
pub const MANIFEST_URL_PATH: &str = "/kitchen-manifest.json";

/// Fetches [`MANIFEST_URL_PATH`], relative to the page unless a base URL is set.
#[derive(Clone, Debug, Default)]
pub struct HttpManifestSource {
    pub base_url: Option<String>,
}

impl HttpManifestSource {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    pub fn url(&self) -> String {
        match &self.base_url {
            Some(base) => format!("{}{MANIFEST_URL_PATH}", base.trim_end_matches('/')),
            None => MANIFEST_URL_PATH.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ManifestSource for HttpManifestSource {
    async fn load(&self) -> Result<Vec<ManifestItem>, ManifestLoadError> {
        let url = self.url();
        debug!("Fetching manifest from {url}");

        let resp = reqwest::get(&url).await.map_err(|e| {
            warn!("Manifest request failed: {e}");
            ManifestLoadError::Network(e.to_string())
        })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ManifestLoadError::Missing(url));
        }
        if !resp.status().is_success() {
            return Err(ManifestLoadError::Network(format!(
                "{url} returned {}",
                resp.status()
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ManifestLoadError::Network(e.to_string()))?;
        decode_manifest(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_relative_by_default() {
        assert_eq!(HttpManifestSource::default().url(), "/kitchen-manifest.json");
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let source = HttpManifestSource::with_base_url("http://localhost:8080/");
        assert_eq!(source.url(), "http://localhost:8080/kitchen-manifest.json");
    }
}
