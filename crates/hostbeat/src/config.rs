//! Configuration loading and types

use std::path::PathBuf;
use std::time::Duration;

use hostbeat_pkg::InventoryPolicy;
use serde::{Deserialize, Serialize};

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Collector base URL
    #[serde(default = "default_collector_url")]
    pub collector_url: String,
    /// Polling interval in seconds
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Reachability probe timeout in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Policy when the package inventory is unavailable
    #[serde(default)]
    pub inventory_policy: InventoryPolicy,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            collector_url: default_collector_url(),
            interval_secs: default_interval_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            log_level: default_log_level(),
            inventory_policy: InventoryPolicy::default(),
        }
    }
}

fn default_collector_url() -> String {
    "http://localhost:3333/api/v1/infrastructure/metrics".to_string()
}

fn default_interval_secs() -> u64 {
    5
}

fn default_probe_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AgentConfig {
    /// Polling interval
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Reachability probe timeout
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Load configuration from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &PathBuf) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: AgentConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default paths or use defaults
    ///
    /// # Errors
    /// Returns an error if a config file was found but cannot be parsed.
    pub fn load_default() -> eyre::Result<Self> {
        // Check environment variable
        if let Ok(path) = std::env::var("HOSTBEAT_CONFIG") {
            return Self::load(&PathBuf::from(path));
        }

        // Try common paths
        let paths = [
            PathBuf::from("hostbeat.toml"),
            PathBuf::from("/etc/hostbeat/hostbeat.toml"),
        ];

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        tracing::warn!("no config file found, using defaults");
        let mut config = AgentConfig::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Environment overrides win over file values
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("HOSTBEAT_COLLECTOR_URL") {
            self.collector_url = url;
        }
        if let Ok(secs) = std::env::var("HOSTBEAT_INTERVAL_SECS") {
            match secs.parse() {
                Ok(secs) => self.interval_secs = secs,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring invalid HOSTBEAT_INTERVAL_SECS");
                }
            }
        }
    }
}
