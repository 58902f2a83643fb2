use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an absent or partial `config.toml` is valid.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub server: ServerSettings,
    pub analytics: AnalyticsSettings,
    pub logging: LoggingSettings,
}

/// Where the sales table is read from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Path of the CSV file, relative to the working directory.
    pub path: PathBuf,
}

/// Address of the local dashboard server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

/// Parameters of the derived-metrics stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Estimated cost as a fraction of revenue. 0.7 corresponds to 70%.
    pub cost_ratio: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// --- Default Implementations ---

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data.csv"),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8050,
        }
    }
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            cost_ratio: dec!(0.7),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
