//! Request ID assignment.
//!
//! # Responsibilities
//! - Tag each inbound request with a unique `x-request-id` (UUID v4)
//! - Preserve an ID supplied by the caller instead of replacing it
//!
//! # Design Decisions
//! - Applied as a tower layer so the ID exists before any handler logs
//! - The ID rides on the request headers and is therefore forwarded to the
//!   backend along with everything else

use axum::http::{HeaderValue, Request};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that assigns an `x-request-id` header when one is absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                request.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use std::convert::Infallible;

    #[derive(Clone)]
    struct Capture;

    impl Service<Request<Body>> for Capture {
        type Response = Request<Body>;
        type Error = Infallible;
        type Future = std::future::Ready<Result<Self::Response, Self::Error>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, request: Request<Body>) -> Self::Future {
            std::future::ready(Ok(request))
        }
    }

    #[tokio::test]
    async fn test_assigns_id_when_missing() {
        let mut service = RequestIdLayer.layer(Capture);
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let seen = service.call(request).await.unwrap();
        let id = seen.headers().get(X_REQUEST_ID).unwrap().to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_keeps_existing_id() {
        let mut service = RequestIdLayer.layer(Capture);
        let request = Request::builder()
            .uri("/")
            .header(X_REQUEST_ID, "caller-chosen")
            .body(Body::empty())
            .unwrap();

        let seen = service.call(request).await.unwrap();
        assert_eq!(seen.headers().get(X_REQUEST_ID).unwrap(), "caller-chosen");
    }
}
