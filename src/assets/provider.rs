use std::borrow::Cow;

use anyhow::Result;

/// Source of static files served by the widget shell.
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<String>>;
}
