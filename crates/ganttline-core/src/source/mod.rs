//! Task sources.
//!
//! The task list is owned by a remote service; this module fetches it.
//! Callers get either a fully decoded list or a [`SourceError`] -- the
//! layout engine is never handed partial data. A local JSON-file source
//! covers offline use and tests.

mod cache;

pub use cache::{MemoryCache, ReferenceCache};

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::SourceError;
use crate::task::Task;

/// Cache key under which the serialized task list is stored.
const TASKS_CACHE_KEY: &str = "tasks";

/// Default time-to-live for cached task payloads.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Client for the remote task service.
pub struct RestTaskSource {
    base_url: Url,
    http_client: Client,
    cache: Option<Box<dyn ReferenceCache>>,
    cache_ttl: Duration,
}

impl RestTaskSource {
    /// Create a source for a service base URL (e.g.
    /// `https://api.example.com/v1/`).
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http_client: Client::new(),
            cache: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Attach a session cache. Fresh hits skip the network entirely;
    /// successful fetches repopulate the cache.
    pub fn with_cache(mut self, cache: Box<dyn ReferenceCache>, ttl: Duration) -> Self {
        self.cache = Some(cache);
        self.cache_ttl = ttl;
        self
    }

    /// Fetch every task.
    ///
    /// # Errors
    /// * [`SourceError::Http`] on transport failure
    /// * [`SourceError::Status`] on a non-success response
    /// * [`SourceError::Malformed`] when the body does not decode
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, SourceError> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(TASKS_CACHE_KEY) {
                match serde_json::from_str(&hit) {
                    Ok(tasks) => return Ok(tasks),
                    // Stale schema in the cache: drop it and refetch
                    Err(_) => cache.invalidate(TASKS_CACHE_KEY),
                }
            }
        }

        let url = self
            .base_url
            .join("tasks")
            .map_err(|e| SourceError::Endpoint(e.to_string()))?;

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| SourceError::Http {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| SourceError::Http {
            url: url.to_string(),
            source: e,
        })?;

        let tasks: Vec<Task> =
            serde_json::from_str(&body).map_err(|e| SourceError::Malformed(e.to_string()))?;

        if let Some(cache) = &self.cache {
            cache.set(TASKS_CACHE_KEY, body, self.cache_ttl);
        }

        Ok(tasks)
    }
}

/// Task list read from a local JSON file (a JSON array of tasks).
pub struct FileTaskSource {
    path: PathBuf,
}

impl FileTaskSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and decode the file.
    pub fn load(&self) -> Result<Vec<Task>, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::File {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| SourceError::Malformed(e.to_string()))
    }
}
