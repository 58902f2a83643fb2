use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{AnalyticsSettings, DataSettings, LoggingSettings, ServerSettings, Settings};

/// Loads the application settings.
///
/// The file at `path` is optional: built-in defaults apply for anything it
/// does not set, and a missing file yields the defaults unchanged.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.data.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.path must not be empty".to_string(),
        ));
    }
    if settings.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be non-zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = load_settings(Path::new("/nonexistent/dashboard.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server.socket_addr().to_string(), "127.0.0.1:8050");
        assert_eq!(settings.analytics.cost_ratio, dec!(0.7));
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let file = write_toml(
            r#"
            [data]
            path = "sales/2024.csv"

            [server]
            port = 9000
            "#,
        );
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.data.path, PathBuf::from("sales/2024.csv"));
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host.to_string(), "127.0.0.1");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn cost_ratio_is_read_as_decimal() {
        let file = write_toml("[analytics]\ncost_ratio = \"0.65\"\n");
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.analytics.cost_ratio, dec!(0.65));
    }

    #[test]
    fn zero_port_is_rejected() {
        let file = write_toml("[server]\nport = 0\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
