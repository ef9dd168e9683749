//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.staydesk/config.toml`. If missing on first run, a
//! commented-out default is generated so hosts can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StaydeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub notice_ttl_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_NOTICE_TTL_SECS: u64 = 3;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub request_timeout: Duration,
    pub notice_ttl: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.staydesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".staydesk").join("config.toml"))
}

/// Load config from `~/.staydesk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StaydeskConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StaydeskConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StaydeskConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<StaydeskConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(StaydeskConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StaydeskConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Never log the auth token.
    debug!(
        "Config: base_url={:?}, timeout={:?}, notice_ttl={:?}",
        config.backend.base_url,
        config.backend.request_timeout_secs,
        config.general.notice_ttl_secs
    );
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Staydesk Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# notice_ttl_secs = 3                 # How long notifications stay on screen

# [backend]
# base_url = "http://localhost:8080"  # Or set STAYDESK_BASE_URL / --base-url
# auth_token = "eyJ..."               # Or set STAYDESK_AUTH_TOKEN
# request_timeout_secs = 10
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` comes from the `--base-url` flag (None = not specified).
pub fn resolve(config: &StaydeskConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("STAYDESK_BASE_URL").ok())
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Auth token: env → config
    let auth_token = std::env::var("STAYDESK_AUTH_TOKEN")
        .ok()
        .or_else(|| config.backend.auth_token.clone());

    ResolvedConfig {
        base_url,
        auth_token,
        request_timeout: Duration::from_secs(
            config
                .backend
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        ),
        notice_ttl: Duration::from_secs(
            config
                .general
                .notice_ttl_secs
                .unwrap_or(DEFAULT_NOTICE_TTL_SECS),
        ),
    }
}
