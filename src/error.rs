//! Errors raised by the data collaborator and the startup country list

use std::io;
use std::path::PathBuf;

/// Failure of a single fetch. Widgets never catch these; the task queue and
/// the poll loop log them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

impl ApiError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        ApiError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(url: impl Into<String>, reason: impl ToString) -> Self {
        ApiError::MalformedResponse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ApiError::Fetch { url, .. } | ApiError::MalformedResponse { url, .. } => url,
        }
    }
}

/// The country selector could not be filled at startup
#[derive(thiserror::Error, Debug)]
pub enum CountryListError {
    #[error("cannot read country list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("country list {} is not a JSON array of {{id, name}}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
}
