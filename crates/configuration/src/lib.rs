use crate::error::ConfigError;
use crate::settings::Settings;
use config::{Environment, File};
use std::collections::HashMap;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{BackendSettings, CacheSettings, LoggingSettings, ServerSettings};
pub use telemetry::init_tracing;

/// Variables understood for compatibility with earlier deployments,
/// mapped onto their configuration keys.
const LEGACY_VARIABLES: [(&str, &str); 4] = [
    ("FODA_IA_BACKEND_URL", "backend.base_url"),
    ("FODA_IA_API_KEY", "backend.api_key"),
    ("CACHE_TTL", "cache.ttl_secs"),
    ("REQUEST_TIMEOUT", "backend.request_timeout_ms"),
];

/// Loads the application configuration from the process environment.
///
/// Sources are layered lowest first: built-in defaults, the config file
/// (`path` if given, otherwise an optional `config.toml` in the working
/// directory), `FODA__SECTION__KEY` variables, then the legacy variables.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let vars: HashMap<String, String> = std::env::vars().collect();
    load_settings_from(path, &vars)
}

/// Same as `load_settings`, reading variables from `vars` instead of the process.
pub fn load_settings_from(
    path: Option<&Path>,
    vars: &HashMap<String, String>,
) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let mut builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("backend.base_url", "http://localhost:8000")?
        .set_default("backend.api_key", "")?
        .set_default("backend.request_timeout_ms", 10_000)?
        .set_default("cache.ttl_secs", 300)?
        .set_default("logging.level", "info")?
        .add_source(file)
        .add_source(
            Environment::with_prefix("FODA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

    for (variable, key) in LEGACY_VARIABLES {
        builder = builder.set_override_option(key, vars.get(variable).cloned())?;
    }

    let settings = builder.build()?.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(?settings, "Configuration loaded.");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_without_file_or_environment() {
        let settings = load_settings_from(None, &HashMap::new()).unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:3000");
        assert_eq!(settings.backend.base_url, "http://localhost:8000");
        assert_eq!(settings.backend.request_timeout_ms, 10_000);
        assert_eq!(settings.cache.ttl_secs, 300);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.directory.is_none());
        assert!(settings.series.is_empty());
    }

    #[test]
    fn legacy_variables_override_defaults() {
        let settings = load_settings_from(
            None,
            &vars(&[
                ("FODA_IA_BACKEND_URL", "https://backend.example"),
                ("FODA_IA_API_KEY", "secret"),
                ("CACHE_TTL", "60"),
                ("REQUEST_TIMEOUT", "2500"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.backend.base_url, "https://backend.example");
        assert_eq!(settings.backend.api_key, "secret");
        assert_eq!(settings.cache.ttl_secs, 60);
        assert_eq!(settings.backend.request_timeout_ms, 2500);
        assert!(!format!("{:?}", settings.backend).contains("secret"));
    }

    #[test]
    fn prefixed_variables_override_sections() {
        let settings =
            load_settings_from(None, &vars(&[("FODA__SERVER__PORT", "8080")])).unwrap();
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn file_supplies_series_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 4000\n\n[series]\ndropout_rate = [20.0, 19.5, 19.0]\n"
        )
        .unwrap();

        let settings = load_settings_from(Some(file.path()), &HashMap::new()).unwrap();
        assert_eq!(settings.server.port, 4000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.series["dropout_rate"], vec![20.0, 19.5, 19.0]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load_settings_from(Some(Path::new("/nonexistent/foda.toml")), &HashMap::new());
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = load_settings_from(None, &vars(&[("REQUEST_TIMEOUT", "0")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn empty_override_series_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[series]\ndropout_rate = []\n").unwrap();
        let result = load_settings_from(Some(file.path()), &HashMap::new());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
