use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

// Bounded so a dead host cannot hang the run.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("cave_scraper/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// One GET, no retries. Non-2xx and transport failures are both FetchError,
/// with the underlying cause attached.
pub async fn fetch(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    Ok(body.to_vec())
}
