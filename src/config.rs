//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bind address for the HTTP listener.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port for the HTTP listener.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Dev mode: raises log verbosity to debug.
    #[serde(default)]
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("HOST must not be empty".to_string());
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            rust_log: default_log_level(),
        }
    }
}
