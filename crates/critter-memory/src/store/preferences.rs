//! Key/value preferences and the persisted interface language.

use super::Store;
use critter_core::{error::CritterError, lang::Lang};
use tracing::{debug, warn};

/// Preference key holding the interface language code.
pub const LANG_KEY: &str = "lang";

impl Store {
    /// Store a preference (upsert by key).
    pub async fn set_preference(&self, key: &str, value: &str) -> Result<(), CritterError> {
        sqlx::query(
            "INSERT INTO preferences (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| CritterError::Storage(format!("upsert preference failed: {e}")))?;

        Ok(())
    }

    /// Get a single preference by key.
    pub async fn get_preference(&self, key: &str) -> Result<Option<String>, CritterError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CritterError::Storage(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    /// The persisted interface language, `en` when absent or unreadable.
    pub async fn preferred_language(&self) -> Lang {
        match self.get_preference(LANG_KEY).await {
            Ok(Some(code)) => Lang::from_code(&code).unwrap_or_else(|| {
                warn!("ignoring unsupported stored language '{code}'");
                Lang::default()
            }),
            Ok(None) => Lang::default(),
            Err(e) => {
                warn!("failed to read language preference: {e}");
                Lang::default()
            }
        }
    }

    /// Persist the interface language. Storage faults are logged, not returned.
    pub async fn set_preferred_language(&self, lang: Lang) {
        match self.set_preference(LANG_KEY, lang.code()).await {
            Ok(()) => debug!("persisted language preference: {lang}"),
            Err(e) => warn!("failed to persist language preference: {e}"),
        }
    }
}
