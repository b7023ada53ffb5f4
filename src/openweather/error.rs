use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No API key configured; set {0} or pass one to the client builder")]
    MissingApiKey(&'static str),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("City '{0}' not found")]
    CityNotFound(String),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Forecast entry {index} is missing '{field}'")]
    MissingField { index: usize, field: &'static str },
}

impl FetchError {
    /// True when the service reported that the requested location does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::CityNotFound(_))
    }
}
