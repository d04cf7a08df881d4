use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::entry::GameEntry;
use crate::error::Result;
use crate::extract::{extract_detail, extract_search};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Async client for the catalog: fetches detail and search pages and runs
/// the extractors over them.
pub struct HltbClient {
    http: Client,
    config: CatalogConfig,
}

impl HltbClient {
    pub fn new() -> Result<Self> {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch and extract one game's detail page by catalog id.
    pub async fn detail(&self, game_id: &str) -> Result<GameEntry> {
        let url = self.config.detail_url(game_id);
        info!("Fetching detail page {url}");

        let html = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("Detail page for {game_id}: {} bytes", html.len());

        let document = Html::parse_document(&html);
        extract_detail(&document, game_id, &self.config)
    }

    /// Run a search and extract every result, in page order. Ranking by the
    /// returned `similarity` is left to the caller.
    pub async fn search(&self, query: &str) -> Result<Vec<GameEntry>> {
        let url = self.config.search_url();
        info!("Searching for {query:?}");

        // The legacy search endpoint wants its form fields even when they
        // carry the defaults.
        let form = [
            ("queryString", query),
            ("t", "games"),
            ("sorthead", "popular"),
            ("sortd", "Normal Order"),
        ];
        let html = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!("Search page for {query:?}: {} bytes", html.len());

        let document = Html::parse_document(&html);
        let entries = extract_search(&document, query, &self.config)?;
        info!("Found {} results for {query:?}", entries.len());
        Ok(entries)
    }
}
