use std::borrow::Cow;

use anyhow::Result;
use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Page shell bundled with the widget: markup, stylesheet and web manifest.
#[derive(RustEmbed, Debug, Clone, Copy, Default)]
#[folder = "assets/"]
#[include = "*.html"]
#[include = "*.css"]
#[include = "*.json"]
#[exclude = "*.DS_Store"]
pub struct WidgetAssets;

impl AssetProvider for WidgetAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(WidgetAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into_owned()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        offline::{EmbeddedFetcher, Fetcher, Request},
        surface::Slot,
    };

    #[test]
    fn test_shell_is_bundled() {
        let files = AssetProvider::list(&WidgetAssets, "").unwrap();

        for file in ["index.html", "style.css", "manifest.json"] {
            assert!(files.iter().any(|f| f == file), "missing {file}");
        }
    }

    #[test]
    fn test_shell_declares_every_slot() {
        let html = AssetProvider::get(&WidgetAssets, "index.html").unwrap();
        let html = String::from_utf8_lossy(&html);

        for slot in Slot::ALL {
            if matches!(slot, Slot::Document | Slot::Body) {
                continue;
            }
            assert!(
                html.contains(&format!("id=\"{}\"", slot.element_id())),
                "index.html has no element for {slot:?}"
            );
        }
    }

    #[test]
    fn test_embedded_fetcher_serves_shell() {
        smol::block_on(async {
            let fetcher = EmbeddedFetcher::new(WidgetAssets);
            let root = fetcher.fetch(&Request::navigate("./")).await.unwrap();

            assert_eq!(root.status, 200);
            assert!(String::from_utf8_lossy(&root.body).contains("<html"));
        });
    }
}
