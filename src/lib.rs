//! Authenticating HTTP reverse proxy.
//!
//! Forwards every inbound request to a single configured backend, rewriting
//! the destination and injecting basic-auth credentials on the way out.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                  AUTHPROXY                   │
//!                    │                                              │
//!   Client Request   │  ┌─────────┐    ┌──────────────────────────┐ │
//!   ─────────────────┼─▶│  http   │───▶│          proxy           │ │
//!                    │  │ server  │    │  rewrite scheme/host     │ │
//!                    │  └─────────┘    │  inject Authorization    │ │
//!                    │                 └────────────┬─────────────┘ │
//!                    │                              │               │
//!   Client Response  │  ┌─────────┐    ┌────────────▼─────────────┐ │
//!   ◀────────────────┼──│ relay / │◀───│       hyper client       │◀┼── Backend
//!                    │  │  500    │    └──────────────────────────┘ │
//!                    │  └─────────┘                                 │
//!                    │  ┌──────────────────────────────────────────┐│
//!                    │  │  config (TOML) · tracing · request IDs   ││
//!                    │  └──────────────────────────────────────────┘│
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The proxy core (`proxy` module) is framework-agnostic: construct it from a
//! [`config::BackendConfig`] and hand it requests. The `http` module is the
//! thin axum adapter that binds it to a listener.

pub mod config;
pub mod http;
pub mod proxy;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use proxy::{ProxyError, ReverseProxy};
