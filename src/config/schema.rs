//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Backend destination and credentials.
    pub backend: BackendConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Backend destination and basic-auth credentials.
///
/// The URL is kept as a raw string here; it is parsed and validated when the
/// proxy is constructed, so a bad URL fails startup rather than
/// deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Absolute URL of the backend (e.g., "http://backend.local:9000").
    /// Only scheme and host are used for routing; any path is ignored.
    pub url: String,

    /// Basic-auth user. May be empty, meaning "no user".
    pub basic_auth_user: String,

    /// Basic-auth password.
    pub basic_auth_password: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:4100".to_string(),
            basic_auth_user: String::new(),
            basic_auth_password: String::new(),
        }
    }
}

/// Timeout configuration.
///
/// The request timeout is enforced by the HTTP server layer, not by the proxy
/// core itself; the core waits on the backend for as long as the server
/// allows the request to live.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Overall deadline for producing a response, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.backend.url, "http://localhost:4100");
        assert!(config.backend.basic_auth_user.is_empty());
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_minimal_toml() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [backend]
            url = "http://backend.local:9000"
            basic_auth_user = "alice"
            basic_auth_password = "s3cret"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.url, "http://backend.local:9000");
        assert_eq!(config.backend.basic_auth_user, "alice");
        assert_eq!(config.backend.basic_auth_password, "s3cret");
        // Unspecified sections fall back to defaults.
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: ProxyConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend.url, "http://localhost:4100");
    }
}
