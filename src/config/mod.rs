// Configuration module

mod models;

pub use models::*;

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `TRANSLATE_GATEWAY__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "TRANSLATE_GATEWAY";

impl AppConfig {
    /// Load configuration with precedence (highest first):
    /// 1. Environment variables
    /// 2. Config file (`path`, or `~/.translate-gateway/config.toml`)
    /// 3. Defaults
    ///
    /// CLI flags are applied on top by the caller. An explicit `path` must
    /// exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(file)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))
    }

    /// Apply command-line overrides for the listen address.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".translate-gateway")
            .join("config.toml")
    }
}
