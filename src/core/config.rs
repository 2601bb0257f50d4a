//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.trove/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TroveConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub seed: Option<u64>,
    pub cheats: Option<bool>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "trove.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options except the seed)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means seed from the OS.
    pub seed: Option<u64>,
    pub cheats: bool,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub cheats: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

/// Values read from the environment. Split out so resolution stays testable.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub seed: Option<String>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            seed: std::env::var("TROVE_SEED").ok(),
            log_level: std::env::var("TROVE_LOG_LEVEL").ok(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.trove/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trove").join("config.toml"))
}

/// Load config from `~/.trove/config.toml`.
pub fn load_config() -> Result<TroveConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(TroveConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TroveConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<TroveConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TroveConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: TroveConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Trove Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# seed = 42                  # Fixed board layout (or set TROVE_SEED)
# cheats = false             # Start with hidden treasure shown
# log_file = "trove.log"
# log_level = "info"         # "off", "error", "warn", "info", "debug", "trace"
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
pub fn resolve(config: &TroveConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    // Seed: CLI → env → config → none
    let seed = cli
        .seed
        .or_else(|| env.seed.as_deref().and_then(|s| parse_or_warn("TROVE_SEED", s)))
        .or(config.general.seed);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            env.log_level
                .as_deref()
                .and_then(|s| parse_or_warn("TROVE_LOG_LEVEL", s))
        })
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|s| parse_or_warn("log_level", s))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        seed,
        // --cheats can only switch cheats on
        cheats: cli.cheats || config.general.cheats.unwrap_or(false),
        log_file,
        log_level,
    }
}

fn parse_or_warn<T: std::str::FromStr>(name: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {name}: {raw:?}");
            None
        }
    }
}
