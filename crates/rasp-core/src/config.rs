use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Roster re-scrape cadence: once an hour, starting at process startup.
pub const REFRESH_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_GROUPS_URL: &str = "https://pnu.edu.ru/rasp/groups/";

/// Top-level config (rasp.toml + RASP_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RaspConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Upstream timetable site. The per-group schedule page lives at
/// `{groups_url}{group_id}/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_groups_url")]
    pub groups_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            groups_url: default_groups_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: REFRESH_INTERVAL_SECS,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_groups_url() -> String {
    DEFAULT_GROUPS_URL.to_string()
}
fn default_interval_secs() -> u64 {
    REFRESH_INTERVAL_SECS
}

impl RaspConfig {
    /// Load config from a TOML file with RASP_* env var overrides.
    ///
    /// Nested keys use a double-underscore separator, e.g.
    /// `RASP_SOURCE__GROUPS_URL`.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: RaspConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("RASP_").split("__"))
            .extract()
            .map_err(|e| crate::error::RaspError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.rasp/rasp.toml", home)
}
