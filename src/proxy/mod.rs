//! Reverse proxy core.
//!
//! # Responsibilities
//! - Parse and validate the backend URL at construction
//! - Rewrite inbound requests onto the backend (scheme + host only)
//! - Inject the configured basic-auth `Authorization` header
//! - Forward through the shared hyper client and relay the response
//! - Translate transport failures into synthesized 500 responses
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks); swapping the
//!   backend means building a new proxy
//! - Framework-agnostic: takes `http` requests, returns `http` responses;
//!   the axum adapter lives in the `http` module
//! - Backend-issued status codes (4xx/5xx included) are not errors here and
//!   pass through untouched
//! - No retries; a transport failure is reported immediately

pub mod auth;
pub mod error;
pub mod forwarder;
pub mod target;

pub use error::ProxyError;
pub use forwarder::ReverseProxy;
pub use target::ProxyTarget;
