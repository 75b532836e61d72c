//! HTTP server subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, catch-all route)
//!     → request.rs (assign request ID)
//!     → proxy subsystem (rewrite, forward, relay)
//!     → response returned to client
//! ```
//!
//! # Design Decisions
//! - The router is a thin dispatcher: every path and method lands on the
//!   same proxy handler
//! - Request timeout lives here as server policy; the proxy core imposes
//!   no deadline of its own

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
