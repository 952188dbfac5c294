//! Server configuration module

use clap::Parser;

use crate::config::{
    catalogue::CatalogueConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod catalogue;
pub(crate) mod observability;
pub(crate) mod server;

/// Shop JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shop-json", about = "Shop JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Product catalogue settings.
    #[command(flatten)]
    pub catalogue: CatalogueConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{observability::LogFormat, *};

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["shop-json"])?;

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn arguments_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "shop-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--demo-products",
            "false",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert!(!config.catalogue.demo_products);

        Ok(())
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = ServerConfig::try_parse_from(["shop-json", "--port", "http"]);

        assert!(result.is_err(), "expected a parse error for a non-numeric port");
    }
}
