//! Essay manifest entries, as emitted by the site's build step.

use serde::{Deserialize, Serialize};

use crate::error::CritterError;

/// One essay as listed in `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayEntry {
    /// File name relative to the essays directory (e.g. `on-moss.html`).
    pub file: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// First publication date, `YYYY-MM-DD`. May be empty.
    #[serde(default)]
    pub published: String,
    /// Last modification date, `YYYY-MM-DD`. May be empty.
    #[serde(default)]
    pub updated: String,
    /// Language the essay is written in. Not limited to interface languages.
    #[serde(default = "default_entry_lang")]
    pub lang: String,
}

fn default_entry_lang() -> String {
    "en".to_string()
}

/// Decode a manifest body. Anything but a JSON array of entries is an error.
pub fn parse_manifest(body: &str) -> Result<Vec<EssayEntry>, CritterError> {
    serde_json::from_str(body)
        .map_err(|e| CritterError::Manifest(format!("malformed manifest: {e}")))
}

/// Find the entry for `file`, comparing file names exactly.
pub fn find_entry<'a>(entries: &'a [EssayEntry], file: &str) -> Option<&'a EssayEntry> {
    entries.iter().find(|e| e.file == file)
}
