//! Proxy error definitions.

use thiserror::Error;

/// Errors that prevent a proxy from being constructed.
///
/// All variants are construction-time failures: once a proxy exists, request
/// handling never returns an error (transport failures become synthesized
/// 500 responses instead).
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The configured backend URL does not parse as an absolute URL.
    #[error("invalid backend URL {url:?}: {source}")]
    InvalidBackendUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The backend URL parsed but names no host to route to.
    #[error("backend URL {url:?} has no host")]
    MissingHost { url: String },

    /// The backend URL uses a scheme the outbound client cannot speak.
    /// The client is plain HTTP; an `https` backend would construct fine
    /// and then fail every request, so it is refused up front.
    #[error("backend URL {url:?} uses unsupported scheme {scheme:?}; only \"http\" is supported")]
    UnsupportedScheme { url: String, scheme: String },

    /// The backend URL's scheme or authority is not usable as an HTTP
    /// request target.
    #[error("backend URL {url:?} is not a usable HTTP target: {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: axum::http::uri::InvalidUri,
    },

    /// The credential pair cannot be carried in an `Authorization` header
    /// (e.g. control characters in user or password).
    #[error("basic-auth credentials cannot be encoded into a header value")]
    InvalidCredentials(#[source] axum::http::header::InvalidHeaderValue),
}
