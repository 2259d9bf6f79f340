//! Individual essay pages: fill in the date line from the sibling manifest.

use critter_core::{config::SiteConfig, manifest::find_entry, page::Page, traits::ManifestSource};
use tracing::{debug, warn};

use crate::meta::meta_line;

/// What `load_essay_date` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    /// The page has no date slot.
    Skipped,
    /// The manifest could not be loaded; the fallback text stays.
    Unavailable,
    /// The manifest has no entry for this page; the fallback text stays.
    NotListed,
    /// The date slot was filled in.
    Filled,
}

/// Look up this page in the manifest next to it and fill its date slot.
pub async fn load_essay_date(
    page: &mut Page,
    source: &dyn ManifestSource,
    site: &SiteConfig,
) -> DateOutcome {
    if page.essay_date.is_none() {
        return DateOutcome::Skipped;
    }

    let path = page.resolve(&site.detail_manifest);
    let entries = match source.fetch_manifest(&path).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("essay date: {} manifest {path} unavailable: {e}", source.name());
            return DateOutcome::Unavailable;
        }
    };

    let file = page.file_name();
    match find_entry(&entries, file) {
        Some(entry) => {
            let line = meta_line(entry);
            debug!("essay date: {file} -> {line}");
            page.essay_date = Some(line);
            DateOutcome::Filled
        }
        None => {
            debug!("essay date: {file} not listed in {path}");
            DateOutcome::NotListed
        }
    }
}
