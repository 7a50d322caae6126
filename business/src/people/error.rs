use thiserror::Error;

use crate::http::HttpError;

/// Everything that can stop a people load. There is no retry; the first error wins.
#[derive(Debug, Error)]
pub enum SwapiError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("could not parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("homeworld lookup for {person} ({url}) failed: {source}")]
    Homeworld {
        person: String,
        url: String,
        #[source]
        source: Box<SwapiError>,
    },
}

impl SwapiError {
    /// The URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. }
            | Self::Status { url, .. }
            | Self::Parse { url, .. }
            | Self::Homeworld { url, .. } => url,
        }
    }
}
