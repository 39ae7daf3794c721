use log::debug;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

use super::SourceError;

/// Create an HTTP client for the citation APIs
pub fn create_api_client(user_agent: &str, timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

/// Build `{base}/{segments...}`, percent-encoding each segment (so `/` inside a DOI
/// becomes `%2F`)
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url, SourceError> {
    let mut url = Url::parse(base).map_err(|e| SourceError::Url(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| SourceError::Url(format!("{}: cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// GET a URL and decode the body as JSON. Anything but 200 OK is an error.
pub async fn get_json(client: &Client, url: Url) -> Result<Value, SourceError> {
    debug!("GET {}", url);
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(SourceError::Status(status.as_u16()));
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
