//! Request rewriting, forwarding, and response relay.

use std::fmt::Write as _;

use axum::body::Body;
use axum::http::uri::PathAndQuery;
use axum::http::{header, Request, Response, StatusCode, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::config::BackendConfig;
use crate::http::X_REQUEST_ID;
use crate::proxy::auth::basic_auth_header;
use crate::proxy::error::ProxyError;
use crate::proxy::target::ProxyTarget;

/// Stateless single-backend reverse proxy.
///
/// Every invocation of [`handle`](Self::handle) is independent; the only
/// state is the immutable target and the precomputed `Authorization` header,
/// so one instance is shared across all concurrent request tasks. Connection
/// reuse is the hyper client's concern, not this type's.
pub struct ReverseProxy {
    target: ProxyTarget,
    auth_header: axum::http::HeaderValue,
    client: Client<HttpConnector, Body>,
}

impl ReverseProxy {
    /// Build a proxy from backend settings.
    ///
    /// Validates the backend URL and encodes the credential pair; no network
    /// I/O happens here. An unusable URL or credential pair fails
    /// construction, so a misconfigured proxy never serves a request.
    pub fn new(config: &BackendConfig) -> Result<Self, ProxyError> {
        let target = ProxyTarget::parse(&config.url)?;
        let auth_header = basic_auth_header(&config.basic_auth_user, &config.basic_auth_password)
            .map_err(ProxyError::InvalidCredentials)?;

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Ok(Self {
            target,
            auth_header,
            client,
        })
    }

    /// Proxy one request: rewrite, forward, relay.
    ///
    /// Always returns a well-formed response. Backend responses pass through
    /// verbatim regardless of status code; a transport failure (the backend
    /// never produced a valid HTTP response) is logged and synthesized into
    /// a 500 whose body describes the error in plain text.
    pub async fn handle(&self, mut request: Request<Body>) -> Response<Body> {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        self.rewrite(&mut request);

        tracing::debug!(
            request_id = %request_id,
            method = %request.method(),
            target = %request.uri(),
            "Forwarding request"
        );

        match self.client.request(request).await {
            Ok(response) => {
                let (parts, body) = response.into_parts();
                Response::from_parts(parts, Body::new(body))
            }
            Err(err) => {
                let detail = describe(&err);
                tracing::error!(
                    request_id = %request_id,
                    error = %detail,
                    "Backend request failed"
                );

                let mut response = Response::new(Body::from(detail));
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }

    /// Redirect the request at the backend.
    ///
    /// Scheme and authority come from the target; path, query, method, and
    /// body stay exactly as received. Any inbound `Authorization` header is
    /// overwritten with the configured credentials.
    fn rewrite(&self, request: &mut Request<Body>) {
        let mut parts = request.uri().clone().into_parts();
        parts.scheme = Some(self.target.scheme().clone());
        parts.authority = Some(self.target.authority().clone());
        if parts.path_and_query.is_none() {
            parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        // Unreachable with scheme, authority, and a rooted path all set,
        // but a silent fall-through here would forward to the original
        // (relative) URI instead of the backend.
        match Uri::from_parts(parts) {
            Ok(uri) => *request.uri_mut() = uri,
            Err(err) => {
                tracing::error!(
                    uri = %request.uri(),
                    error = %err,
                    "Failed to rewrite request URI; forwarding unrewritten"
                );
            }
        }

        request
            .headers_mut()
            .insert(header::AUTHORIZATION, self.auth_header.clone());
    }
}

/// Flatten an error and its source chain into one plain-text line.
///
/// The hyper client's top-level error ("client error (Connect)") hides the
/// useful part (connection refused, DNS failure) in its sources.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(detail, ": {cause}");
        source = cause.source();
    }
    detail
}
