//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → ProxyConfig (immutable)
//!     → backend URL validated by proxy construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Syntactic validation is serde's job; the backend URL is validated
//!   semantically where it is consumed, at `ReverseProxy` construction

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::BackendConfig;
pub use schema::ListenerConfig;
pub use schema::ProxyConfig;
pub use schema::TimeoutConfig;
