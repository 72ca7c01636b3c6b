//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.academicai/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::request::{CitationStyle, WordCount};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AcademicConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_word_count: Option<WordCount>,
    pub default_citation_style: Option<CitationStyle>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DELAY_MS: u64 = 2000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub word_count: WordCount,
    pub citation_style: CitationStyle,
    pub delay: Duration,
    pub timeout: Duration,
    pub initial_topic: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            word_count: WordCount::default(),
            citation_style: CitationStyle::default(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            initial_topic: None,
        }
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub topic: Option<String>,
    pub word_count: Option<WordCount>,
    pub citation_style: Option<CitationStyle>,
    pub delay_ms: Option<u64>,
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

/// Returns the path to `~/.academicai/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".academicai").join("config.toml"))
}

/// Load config from `~/.academicai/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AcademicConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AcademicConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AcademicConfig::default());
        }
    };
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<AcademicConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AcademicConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AcademicConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# AcademicAI Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_word_count = 500           # 250, 500, 1000, 1500 or 2000
# default_citation_style = "APA"     # "APA", "MLA", "Chicago" or "Harvard"

# [generation]
# delay_ms = 2000                    # Or set ACADEMICAI_DELAY_MS
# timeout_secs = 30
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AcademicConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &AcademicConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Word count: CLI → env → config → default
    let word_count = cli
        .word_count
        .or_else(|| env_parsed(&env, "ACADEMICAI_WORD_COUNT"))
        .or(config.general.default_word_count)
        .unwrap_or_default();

    // Citation style: CLI → env → config → default
    let citation_style = cli
        .citation_style
        .or_else(|| env_parsed(&env, "ACADEMICAI_CITATION_STYLE"))
        .or(config.general.default_citation_style)
        .unwrap_or_default();

    // Delay: CLI → env → config → default
    let delay_ms = cli
        .delay_ms
        .or_else(|| env_parsed(&env, "ACADEMICAI_DELAY_MS"))
        .or(config.generation.delay_ms)
        .unwrap_or(DEFAULT_DELAY_MS);

    let timeout_secs = config
        .generation
        .timeout_secs
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let initial_topic = cli
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let delay = Duration::from_millis(delay_ms);
    let mut timeout = Duration::from_secs(timeout_secs);
    // The fixed-delay generator must always finish inside the timeout
    if timeout <= delay {
        let raised = delay + Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        warn!(
            "Timeout {:?} does not exceed delay {:?}, raising it to {:?}",
            timeout, delay, raised
        );
        timeout = raised;
    }

    ResolvedConfig {
        word_count,
        citation_style,
        delay,
        timeout,
        initial_topic,
    }
}

/// Reads and parses an env var, logging (and ignoring) invalid values.
fn env_parsed<T>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let raw = env(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
