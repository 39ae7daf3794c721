use async_trait::async_trait;
use reqwest::Client;

use super::{count_field, endpoint_url, get_json, CitationSource, SourceError};

pub const CROSSREF_API_BASE: &str = "https://api.crossref.org";

/// Crossref works API: `GET {base}/works/{doi}`, count at
/// `message["is-referenced-by-count"]`
pub struct CrossrefSource {
    client: Client,
    base_url: String,
}

impl CrossrefSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CitationSource for CrossrefSource {
    fn name(&self) -> &str {
        "Crossref"
    }

    async fn citation_count(&self, doi: &str) -> Result<u64, SourceError> {
        let url = endpoint_url(&self.base_url, &["works", doi])?;
        let body = get_json(&self.client, url).await?;

        let message = body
            .get("message")
            .filter(|m| m.is_object())
            .ok_or(SourceError::Shape("missing message object"))?;

        count_field(message, "is-referenced-by-count")
    }
}
