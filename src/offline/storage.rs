use std::sync::Arc;

use indexmap::IndexMap;
use smol::lock::RwLock;

use crate::offline::Response;

type Cache = IndexMap<String, Response>;

/// Named caches of responses keyed by request URL.
///
/// Clones share the same underlying caches.
#[derive(Debug, Clone, Default)]
pub struct CacheStorage {
    caches: Arc<RwLock<IndexMap<String, Cache>>>,
}

impl CacheStorage {
    pub async fn put(&self, cache: &str, url: &str, response: Response) {
        let mut caches = self.caches.write().await;
        caches
            .entry(cache.to_owned())
            .or_default()
            .insert(url.to_owned(), response);
    }

    /// Stores every entry under a single lock.
    pub async fn put_all(&self, cache: &str, entries: Vec<(String, Response)>) {
        let mut caches = self.caches.write().await;
        caches.entry(cache.to_owned()).or_default().extend(entries);
    }

    /// First match for `url` across all caches, oldest cache first.
    pub async fn lookup(&self, url: &str) -> Option<Response> {
        let caches = self.caches.read().await;
        caches.values().find_map(|cache| cache.get(url).cloned())
    }

    pub async fn lookup_in(&self, cache: &str, url: &str) -> Option<Response> {
        let caches = self.caches.read().await;
        caches.get(cache)?.get(url).cloned()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.caches.read().await.keys().cloned().collect()
    }

    pub async fn has(&self, cache: &str) -> bool {
        self.caches.read().await.contains_key(cache)
    }

    pub async fn delete(&self, cache: &str) -> bool {
        self.caches.write().await.shift_remove(cache).is_some()
    }

    /// Number of entries in `cache`.
    pub async fn len(&self, cache: &str) -> usize {
        self.caches.read().await.get(cache).map_or(0, IndexMap::len)
    }
}
