use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub cache: CacheSettings,
    pub logging: LoggingSettings,
    /// Replacement series keyed by indicator key (e.g. `dropout_rate`).
    #[serde(default)]
    pub series: HashMap<String, Vec<f64>>,
}

/// Where the HTTP adapter listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// `host:port`, ready to be parsed into a socket address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The upstream data backend the analysis is published alongside.
#[derive(Clone, Deserialize)]
pub struct BackendSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Upper bound for a single request, in milliseconds.
    pub request_timeout_ms: u64,
}

impl fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("BackendSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &api_key)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

/// Response caching for finished reports.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Seconds a report stays fresh. Zero disables caching.
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `engine=debug,info`.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Settings {
    /// Checks the invariants the deserializer cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError("server.host must not be empty".to_string()));
        }
        if self.backend.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "backend.request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level '{}' is not a valid filter: {}",
                self.logging.level, e
            )));
        }
        if let Some((key, _)) = self.series.iter().find(|(_, values)| values.is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "series.{} must contain at least one observation",
                key
            )));
        }
        Ok(())
    }
}
