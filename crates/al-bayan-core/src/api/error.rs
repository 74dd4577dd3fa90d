use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures talking to the remote content source.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_decode() {
            ApiError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            ApiError::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }
}
