//! In-memory manifest source for tests.

use async_trait::async_trait;
use critter_core::{error::CritterError, traits::ManifestSource};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves fixed bodies by path and records every requested path.
#[derive(Default)]
pub(crate) struct StaticSource {
    bodies: HashMap<String, String>,
    pub(crate) requests: Mutex<Vec<String>>,
}

impl StaticSource {
    pub(crate) fn with(mut self, path: &str, body: &str) -> Self {
        self.bodies.insert(path.to_string(), body.to_string());
        self
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ManifestSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, path: &str) -> Result<String, CritterError> {
        self.requests.lock().unwrap().push(path.to_string());
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| CritterError::Manifest(format!("{path} returned 404 Not Found")))
    }
}
