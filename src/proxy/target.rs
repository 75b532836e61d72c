//! Backend target parsing and validation.

use axum::http::uri::{Authority, Scheme};
use url::Url;

use crate::proxy::error::ProxyError;

/// The validated routing target derived from the configured backend URL.
///
/// Only scheme and host (plus port) are retained. A path, query, or fragment
/// on the configured URL is deliberately ignored: the backend URL is a
/// routing target, not a path template, and the inbound path is forwarded
/// verbatim. This matches the reference behavior and is part of the
/// contract; changing it would silently re-root every proxied path.
#[derive(Debug, Clone)]
pub struct ProxyTarget {
    scheme: Scheme,
    authority: Authority,
}

impl ProxyTarget {
    /// Parse an absolute URL into a routing target.
    ///
    /// Fails when the input is not an absolute URL, names no host, carries
    /// a scheme/authority that cannot appear in a request URI, or uses a
    /// scheme other than `http` (the outbound client does not terminate
    /// TLS, so an `https` target could never be served).
    pub fn parse(raw: &str) -> Result<Self, ProxyError> {
        let parsed = Url::parse(raw).map_err(|source| ProxyError::InvalidBackendUrl {
            url: raw.to_string(),
            source,
        })?;

        let host = parsed.host_str().ok_or_else(|| ProxyError::MissingHost {
            url: raw.to_string(),
        })?;

        let scheme =
            Scheme::try_from(parsed.scheme()).map_err(|source| ProxyError::InvalidTarget {
                url: raw.to_string(),
                source,
            })?;
        if scheme != Scheme::HTTP {
            return Err(ProxyError::UnsupportedScheme {
                url: raw.to_string(),
                scheme: scheme.as_str().to_string(),
            });
        }

        let authority = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let authority =
            Authority::try_from(authority.as_str()).map_err(|source| ProxyError::InvalidTarget {
                url: raw.to_string(),
                source,
            })?;

        if !parsed.path().is_empty() && parsed.path() != "/" {
            tracing::warn!(
                url = raw,
                ignored_path = parsed.path(),
                "Backend URL path is ignored; only scheme and host are used"
            );
        }

        Ok(Self { scheme, authority })
    }

    /// Scheme every outbound request is rewritten to.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Authority (host[:port]) every outbound request is rewritten to.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }
}
