//! Error types.

use std::io;
use thiserror::Error;

/// Boxed error, for the underlying cause of a malformed payload.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// `Result` alias defaulting to the crate error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures of the gallery resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// Not a supported article URL.
    #[error("invalid article URL: {0:?}")]
    InvalidUrl(String),

    /// Network, timeout or HTTP status failure.
    #[error("HTTP request to {url} failed")]
    Transport {
        /// Requested URL.
        url: String,
        /// What went wrong.
        #[source]
        source: TransportError,
    },

    /// The HTML or JSON doesn't have the expected shape.
    #[error("malformed payload: {context}")]
    MalformedPayload {
        /// What was being decoded.
        context: String,
        /// Underlying decoding error, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// No gallery descriptor matches the article.
    #[error("gallery endpoint not found for article {0}")]
    EndpointNotFound(String),
}

impl Error {
    /// Builds a transport error for `url`.
    pub(crate) fn transport(
        url: &str,
        source: impl Into<TransportError>,
    ) -> Self {
        Self::Transport {
            url: url.to_owned(),
            source: source.into(),
        }
    }

    /// Builds a malformed payload error caused by `source`.
    pub(crate) fn malformed(
        context: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::MalformedPayload {
            context: context.into(),
            source: Some(source.into()),
        }
    }
}

/// Underlying cause of a transport failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request couldn't be sent or completed (DNS, TLS, timeout, ...).
    #[error(transparent)]
    Request(Box<ureq::Error>),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body couldn't be read.
    #[error("read response body")]
    Body(#[from] io::Error),
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        match err {
            // Dropping the response releases the connection.
            ureq::Error::Status(code, _) => Self::Status(code),
            err => Self::Request(Box::new(err)),
        }
    }
}
