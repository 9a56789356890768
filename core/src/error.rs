//! Error types for the Blue Archive API client.
//!
//! # Design
//! Remote failures (non-200 statuses, network errors) are NOT errors here:
//! they come back as `ApiResult::Error(HttpErrorResponse)`. `ClientError`
//! covers the faults a caller must fix in their own code: missing arguments,
//! using a closed client, or a payload that no longer matches the models.

/// Faults raised by the client before or after a remote exchange.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An operation that needs at least one argument received none.
    /// Raised before any request is sent.
    #[error("at least one parameter must be specified: {0}")]
    MissingArgument(&'static str),

    /// A wire string did not match any member of a strict enum.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    /// A route template or base URL could not be turned into a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A success payload did not have the shape the models expect.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The transport could not be constructed.
    #[error("transport setup failed: {0}")]
    Transport(#[from] TransportError),

    /// The client was used after `close()` or closed twice.
    #[error("client is closed")]
    Closed,
}

impl ClientError {
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

/// Errors reported by a `Transport` implementation.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP exchange itself failed (connect, TLS, body read, ...).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Any other failure described as text, for non-reqwest transports.
    #[error("{0}")]
    Other(String),

    /// The transport was already released.
    #[error("transport is closed")]
    Closed,
}
