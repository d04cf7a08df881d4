use serde::{Deserialize, Serialize};

/// Where the catalog lives. The extractors and [`crate::HltbClient`] take
/// this explicitly so tests can run against synthetic documents and fake
/// hosts instead of baked-in URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL including trailing slash, e.g. `https://howlongtobeat.com/`.
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://howlongtobeat.com/".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn detail_url(&self, game_id: &str) -> String {
        format!("{}game.php?id={}", self.base_url, game_id)
    }

    pub fn search_url(&self) -> String {
        format!("{}search_main.php", self.base_url)
    }

    /// Absolutize an image path from the page. Already-absolute sources pass
    /// through unchanged.
    pub fn image_url(&self, src: &str) -> String {
        if src.starts_with("http://") || src.starts_with("https://") {
            src.to_string()
        } else {
            format!("{}{}", self.base_url, src.trim_start_matches('/'))
        }
    }
}
