use async_trait::async_trait;
use reqwest::Client;

use super::{count_field, endpoint_url, get_json, CitationSource, SourceError};

pub const SEMANTIC_SCHOLAR_API_BASE: &str = "https://api.semanticscholar.org";

/// Semantic Scholar graph API:
/// `GET {base}/graph/v1/paper/DOI:{doi}?fields=citationCount`
pub struct SemanticScholarSource {
    client: Client,
    base_url: String,
}

impl SemanticScholarSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CitationSource for SemanticScholarSource {
    fn name(&self) -> &str {
        "Semantic Scholar"
    }

    async fn citation_count(&self, doi: &str) -> Result<u64, SourceError> {
        let paper_id = format!("DOI:{}", doi);
        let mut url = endpoint_url(&self.base_url, &["graph", "v1", "paper", paper_id.as_str()])?;
        url.query_pairs_mut().append_pair("fields", "citationCount");

        let body = get_json(&self.client, url).await?;
        if !body.is_object() {
            return Err(SourceError::Shape("paper is not an object"));
        }

        count_field(&body, "citationCount")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::create_api_client;
    use mockito::Matcher;
    use serde_json::json;
    use std::time::Duration;

    fn source_for(server: &mockito::ServerGuard) -> SemanticScholarSource {
        let client = create_api_client("test/1.0", Duration::from_secs(5)).unwrap();
        SemanticScholarSource::new(client, server.url())
    }

    #[tokio::test]
    async fn test_semantic_scholar_reads_citation_count() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/graph/v1/paper/DOI:10.1%2Fbbb")
            .match_query(Matcher::UrlEncoded(
                "fields".to_string(),
                "citationCount".to_string(),
            ))
            .with_status(200)
            .with_body(json!({"paperId": "abc123", "citationCount": 9}).to_string())
            .expect(1)
            .create_async()
            .await;

        let count = source_for(&server).citation_count("10.1/bbb").await.unwrap();
        assert_eq!(count, 9);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_semantic_scholar_missing_count_is_zero() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/graph/v1/paper/DOI:10.1%2Fnew")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"paperId": "abc123"}).to_string())
            .create_async()
            .await;

        let count = source_for(&server).citation_count("10.1/new").await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_semantic_scholar_null_body_fails() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/graph/v1/paper/DOI:10.1%2Fnull")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("null")
            .create_async()
            .await;

        let result = source_for(&server).citation_count("10.1/null").await;
        assert!(matches!(result, Err(SourceError::Shape(_))));
    }

    #[tokio::test]
    async fn test_semantic_scholar_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/graph/v1/paper/DOI:10.1%2Fbusy")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let result = source_for(&server).citation_count("10.1/busy").await;
        assert!(matches!(result, Err(SourceError::Status(429))));
    }
}
