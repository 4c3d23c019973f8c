//! RSS feed HTTP client.

use feed_rs::parser;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::feed::entry::FeedEntry;

/// User agent sent on feed requests. Reddit throttles the default
/// reqwest agent aggressively.
const USER_AGENT: &str = "reddit-embed-relay/1.0";

/// Client for fetching and parsing RSS feeds.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Feed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch and parse a feed, returning its entries in feed order.
    pub async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed(format!("HTTP {} from {}", status, url)));
        }

        let body = response.bytes().await?;

        let feed = parser::parse(&body[..])
            .map_err(|e| Error::Feed(format!("Failed to parse feed from {}: {}", url, e)))?;

        Ok(feed.entries.iter().map(FeedEntry::from).collect())
    }

    /// Fetch a feed, treating any failure as an empty feed.
    ///
    /// Per-bucket failures must not abort the run; the failure is logged
    /// and the other buckets still process.
    pub async fn fetch_entries(&self, url: &str) -> Vec<FeedEntry> {
        match self.fetch(url).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Feed fetch failed for {}: {}", url, e);
                Vec::new()
            }
        }
    }
}
