// src/fetch.rs

use reqwest::blocking::Client;
use tracing::info;
use url::Url;

/// Fetch `url` and return the response body as text.
///
/// Blocks until the full body has arrived; the archive streams nothing and
/// no timeout is configured, matching the synchronous model of the rest of
/// the crate. Non-2xx statuses become errors.
pub fn fetch_csv(client: &Client, url: &Url) -> reqwest::Result<String> {
    info!(%url, "downloading");
    let body = client.get(url.clone()).send()?.error_for_status()?.text()?;
    info!(bytes = body.len(), "download complete");
    Ok(body)
}
