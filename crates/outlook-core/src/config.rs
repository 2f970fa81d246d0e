//! Forecast configuration
//!
//! Defaults used by the CLI and server when a request does not name a
//! scenario, horizon or output format, plus server bind settings.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/outlook/config/forecast.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::forecast::{Horizon, Scenario};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/forecast.toml");

/// How forecast results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Extra CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastConfig {
    pub default_scenario: Scenario,
    pub default_horizon: Horizon,
    pub output: OutputFormat,
    pub server: ServerSettings,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_scenario: Scenario::Realistic,
            default_horizon: Horizon::TwelveMonths,
            output: OutputFormat::Table,
            server: ServerSettings::default(),
        }
    }
}

impl ForecastConfig {
    /// Load from the override location, or embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from an explicit path; a missing file falls back to defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("outlook").join("config").join("forecast.toml"))
}

/// File to read config from, if any.
///
/// An explicit path replaces the data-dir override entirely; when it does
/// not exist the embedded defaults are used.
fn config_source(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            warn!(path = %p.display(), "Config file not found, using built-in defaults");
            None
        }
        None => default_config_path().filter(|p| p.exists()),
    }
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<ForecastConfig> {
    let content = match config_source(override_path) {
        Some(ref p) => {
            debug!(path = %p.display(), "Loading forecast config");
            fs::read_to_string(p)
                .map_err(|e| Error::Config(format!("Failed to read {}: {}", p.display(), e)))?
        }
        None => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    defaults: Option<RawDefaults>,
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    scenario: Option<String>,
    horizon: Option<u32>,
    output: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}

fn parse_config(content: &str) -> Result<ForecastConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = ForecastConfig::default();

    if let Some(defaults) = raw.defaults {
        if let Some(scenario) = defaults.scenario {
            config.default_scenario = scenario
                .parse()
                .map_err(|e: Error| Error::Config(e.to_string()))?;
        }
        if let Some(horizon) = defaults.horizon {
            config.default_horizon =
                Horizon::try_from(horizon).map_err(|e| Error::Config(e.to_string()))?;
        }
        if let Some(output) = defaults.output {
            config.output = output.parse().map_err(Error::Config)?;
        }
    }

    if let Some(server) = raw.server {
        if let Some(host) = server.host {
            config.server.host = host;
        }
        if let Some(port) = server.port {
            config.server.port = port;
        }
        if let Some(origins) = server.allowed_origins {
            config.server.allowed_origins = origins;
        }
    }

    Ok(config)
}
