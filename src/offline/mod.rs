//! Offline support for the widget shell.
//!
//! Mirrors a service worker: the shell and media files are cached on install,
//! stale caches are dropped on activation, and requests are answered from the
//! cache before the network is tried.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

mod fetcher;
pub use fetcher::*;

mod storage;
pub use storage::*;

/// Name of the cache owned by the current release.
pub const DEFAULT_CACHE_NAME: &str = "music-widget-cache-v10";

/// Key of the cached shell page served to navigations while offline.
pub const ROOT_PAGE: &str = "./";

const DEFAULT_PRECACHE: [&str; 13] = [
    "./",
    "./index.html",
    "./style.css",
    "./renderer_clean.js",
    "./manifest.json",
    "./assets/clairo_2.mp3",
    "./assets/anything.mp3",
    "./assets/gluesnoopy.jpg",
    "./assets/snoopicon.png",
    "./assets/snoopy.jpg",
    "./assets/sleep.gif",
    "./assets/snoopygif.gif",
    "./assets/space-stars.gif",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    pub name: String,
    /// URLs stored on install.
    pub precache: Vec<String>,
    /// Store successful same-origin network responses on a cache miss.
    pub store_responses: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CACHE_NAME.to_owned(),
            precache: DEFAULT_PRECACHE.iter().map(|url| url.to_string()).collect(),
            store_responses: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMode {
    /// Top-level page load.
    Navigate,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    pub url: String,
    pub mode: RequestMode,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Other,
        }
    }

    pub fn navigate(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Navigate,
        }
    }
}

/// Origin relationship of a response to the page that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Same origin.
    Basic,
    Cors,
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub kind: ResponseKind,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            status,
            kind: ResponseKind::Basic,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_kind(mut self, kind: ResponseKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_storable(&self) -> bool {
        self.status == 200 && self.kind == ResponseKind::Basic
    }
}

/// Cache-first request handling over a [`CacheStorage`].
#[derive(Debug, Clone, Default)]
pub struct OfflineCache {
    config: CacheConfig,
    storage: CacheStorage,
}

impl OfflineCache {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_storage(config, CacheStorage::default())
    }

    /// Shares `storage` with other handles, e.g. the caches left by an older release.
    pub fn with_storage(config: CacheConfig, storage: CacheStorage) -> Self {
        Self { config, storage }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    /// Fetches every precache URL into the current cache.
    ///
    /// Nothing is stored unless every fetch succeeds with an OK status.
    pub async fn install<F: Fetcher + ?Sized>(&self, fetcher: &F) -> Result<usize, CacheError> {
        let mut entries = Vec::with_capacity(self.config.precache.len());

        for url in &self.config.precache {
            let response = fetcher
                .fetch(&Request::get(url.as_str()))
                .await
                .map_err(|source| CacheError::Fetch {
                    url: url.clone(),
                    source,
                })?;

            if !response.is_ok() {
                return Err(CacheError::BadStatus {
                    url: url.clone(),
                    status: response.status,
                });
            }

            entries.push((url.clone(), response));
        }

        let count = entries.len();
        self.storage.put_all(&self.config.name, entries).await;
        info!(cache = %self.config.name, count, "installed offline cache");

        Ok(count)
    }

    /// Deletes every cache not owned by this release and returns their names.
    pub async fn activate(&self) -> Vec<String> {
        let mut deleted = Vec::new();

        for name in self.storage.keys().await {
            if name != self.config.name && self.storage.delete(&name).await {
                info!(cache = %name, "deleted stale cache");
                deleted.push(name);
            }
        }

        deleted
    }

    /// Answers `request` from any cache, falling back to the network.
    pub async fn handle_fetch<F: Fetcher + ?Sized>(
        &self,
        request: &Request,
        fetcher: &F,
    ) -> Result<Response, CacheError> {
        if let Some(cached) = self.storage.lookup(&request.url).await {
            debug!(url = %request.url, "serving from cache");
            return Ok(cached);
        }

        match fetcher.fetch(request).await {
            Ok(response) => {
                if self.config.store_responses && response.is_storable() {
                    self.storage
                        .put(&self.config.name, &request.url, response.clone())
                        .await;
                }

                Ok(response)
            }
            Err(source) => {
                if request.mode == RequestMode::Navigate
                    && let Some(root) = self.storage.lookup_in(&self.config.name, ROOT_PAGE).await
                {
                    warn!(url = %request.url, %source, "network unavailable, serving cached shell");
                    return Ok(root);
                }

                Err(CacheError::Fetch {
                    url: request.url.clone(),
                    source,
                })
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("failed to fetch \"{url}\".")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("request for \"{url}\" returned status {status}.")]
    BadStatus { url: String, status: u16 },
}
