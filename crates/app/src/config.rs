//! Application configuration loaded from environment variables.

/// Service configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `SERVICE_NAME` — logical service name attached to telemetry
///   (default: `"order-service"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub service_name: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "order-service".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            service_name: "order-service".to_string(),
        }
    }
}
