//! Fetch orchestration: registry lookup, page download, extractor dispatch.
//!
//! Downloading is behind [`PageFetcher`] so the run loop can be exercised
//! against canned documents. A fetcher reports every kind of failure the same
//! way, as `None`, and the orchestrator turns that into an empty record list.

use crate::error::Result;
use crate::models::ArticleRecord;
use crate::registry::SourceRegistry;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Retrieves and parses one page.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// `None` on any transport, HTTP status or decoding failure. The cause is
    /// logged by the implementation.
    async fn get_document(&self, url: &str) -> Option<Html>;
}

const USER_AGENT: &str = concat!("up_to_date_news/", env!("CARGO_PKG_VERSION"));

/// [`PageFetcher`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn get_document(&self, url: &str) -> Option<Html> {
        match self.get_text(url).await {
            Ok(body) => {
                debug!(bytes = body.len(), "Downloaded page");
                Some(Html::parse_document(&body))
            }
            Err(e) => {
                error!(%url, error = %e, "Page fetch failed");
                None
            }
        }
    }
}

/// Resolve `source_id`, download its page and run its extractor.
///
/// Only an unknown id is an error. A failed download yields an empty list.
#[instrument(level = "info", skip(registry, fetcher))]
pub async fn fetch<F: PageFetcher>(
    registry: &SourceRegistry,
    fetcher: &F,
    source_id: &str,
) -> Result<Vec<ArticleRecord>> {
    let source = registry.resolve(source_id)?;
    let Some(document) = fetcher.get_document(&source.url).await else {
        return Ok(Vec::new());
    };
    let records = source.extractor.extract(&document);
    info!(
        source = %source_id,
        extractor = source.extractor.name(),
        count = records.len(),
        "Extracted articles"
    );
    Ok(records)
}
