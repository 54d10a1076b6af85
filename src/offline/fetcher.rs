use std::future::Future;

use thiserror::Error;

use crate::{
    assets::AssetProvider,
    offline::{Request, Response},
};

/// The network, as seen by the offline cache.
pub trait Fetcher {
    fn fetch(&self, request: &Request) -> impl Future<Output = Result<Response, FetchError>>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request for \"{url}\" failed: {reason}")]
    Network { url: String, reason: String },
}

/// Serves the shell files bundled into the binary. Unknown paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedFetcher<P: AssetProvider> {
    provider: P,
}

impl<P: AssetProvider> EmbeddedFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    fn asset_path(url: &str) -> &str {
        let path = url.strip_prefix("./").unwrap_or(url);
        let path = path.strip_prefix('/').unwrap_or(path);

        if path.is_empty() { "index.html" } else { path }
    }
}

impl<P: AssetProvider> Fetcher for EmbeddedFetcher<P> {
    async fn fetch(&self, request: &Request) -> Result<Response, FetchError> {
        let path = Self::asset_path(&request.url);

        Ok(match self.provider.get(path) {
            Some(data) => Response::new(request.url.as_str(), 200, data.into_owned())
                .with_content_type(content_type(path)),
            None => Response::new(request.url.as_str(), 404, Vec::new()),
        })
    }
}

fn content_type(path: &str) -> &'static str {
    let extension = path.rsplit_once('.').map_or("", |(_, ext)| ext);

    match extension.to_ascii_lowercase().as_str() {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "mp3" => "audio/mpeg",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
