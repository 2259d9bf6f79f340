//! Manifest sources: a local checkout of the site, or the published site.

use async_trait::async_trait;
use critter_core::{config::SiteConfig, error::CritterError, shellexpand, traits::ManifestSource};
use std::path::PathBuf;
use tracing::debug;

/// Reads site resources from a local directory.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ManifestSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, path: &str) -> Result<String, CritterError> {
        let full = self.root.join(path.trim_start_matches('/'));
        debug!("file: reading {}", full.display());
        tokio::fs::read_to_string(&full).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                CritterError::Manifest(format!("{} not found", full.display()))
            }
            _ => CritterError::Io(e),
        })
    }
}

/// Fetches site resources over HTTP.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ManifestSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, path: &str) -> Result<String, CritterError> {
        let url = self.url_for(path);
        debug!("http: GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CritterError::Manifest(format!("request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(CritterError::Manifest(format!(
                "{url} returned {}",
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| CritterError::Manifest(format!("failed to read {url}: {e}")))
    }
}

/// Build the source the site config points at.
pub fn source_for(site: &SiteConfig) -> Box<dyn ManifestSource> {
    if site.is_remote() {
        Box::new(HttpSource::new(&site.root))
    } else {
        Box::new(FileSource::new(shellexpand(&site.root)))
    }
}
