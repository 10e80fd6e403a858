use thiserror::Error;

/// Any failure while talking to the directory API.
///
/// A load is all-or-nothing, so every variant aborts the whole load.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },
    #[error("species lookup for '{name}' returned no results")]
    NoSpeciesMatch { name: String },
    #[error("invalid api url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

