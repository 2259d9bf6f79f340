use crate::{
    error::CritterError,
    manifest::{parse_manifest, EssayEntry},
};
use async_trait::async_trait;

/// Where manifests are read from: a local checkout or the published site.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Fetch the raw body at `path`, relative to the site root.
    ///
    /// Missing resources and non-success responses are errors.
    async fn fetch(&self, path: &str) -> Result<String, CritterError>;

    /// Fetch and decode the manifest at `path`.
    async fn fetch_manifest(&self, path: &str) -> Result<Vec<EssayEntry>, CritterError> {
        let body = self.fetch(path).await?;
        parse_manifest(&body)
    }
}
