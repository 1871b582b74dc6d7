//! Error types for the BrickLink API client.
//!
//! Every public operation returns [`Result`]. Failures fall into three
//! groups: caller mistakes caught before any request is sent
//! ([`Error::Validation`]), network failures ([`Error::Transport`]) and
//! non-success responses from the API ([`Error::Api`]). None of them are
//! retried by this crate.

use thiserror::Error;

/// A specialized `Result` type for BrickLink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all BrickLink API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied argument was missing or invalid. No request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The HTTP request could not be completed (DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error: status={status}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, uninterpreted
        body: String,
    },

    /// The configured base URL could not be parsed
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A header value could not be built
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The request signature could not be computed
    #[error("Signature error: {0}")]
    Signature(String),
}

/// Argument validation failures, raised before dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required parameter was empty.
    #[error("param is empty: {0}")]
    MissingParameter(&'static str),

    /// A parameter was set to a value outside its allowed set.
    #[error("param \"{value}\" is not valid for {param}")]
    InvalidParameter {
        /// Name of the offending parameter
        param: &'static str,
        /// The rejected value
        value: String,
    },
}

impl Error {
    /// Returns `true` if the call was rejected before any request was sent.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns `true` if the transport gave up because of a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, 4xx status).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Validation(_) | Error::UrlParse(_) | Error::InvalidHeader(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The HTTP status carried by an [`Error::Api`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
