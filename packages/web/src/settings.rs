use std::net::{AddrParseError, SocketAddr};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct Server {
    /// Listen address, e.g. "0.0.0.0:8080". Unset: the address chosen by `dx serve`.
    #[serde(default)]
    pub address: Option<String>,
}

impl Server {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        match &self.address {
            Some(address) => address.parse(),
            None => Ok(dioxus_cli_config::fullstack_address_or_localhost()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub log: Log,
}

impl Settings {
    /// Defaults, then `config.toml`, then `PORTFOLIO_SERVER_ADDRESS` / `PORTFOLIO_LOG_FILTER`.
    pub(crate) fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("log.filter", "info")?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("PORTFOLIO").separator("_"))
            .build()?;

        config.try_deserialize()
    }
}
