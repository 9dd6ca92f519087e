use thiserror::Error;

/// Failure to retrieve a page. Recovered at the top level by returning an
/// all-empty record; never unwinds to the CLI.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}
