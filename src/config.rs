//! Configuration for the shelf demo.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI on top of this module)
//! 2. Environment variables (SHELF_YEAR, SHELF_FORMAT)
//! 3. Config file (.shelf/config.yaml)
//! 4. Defaults (year 1869, text output, minutes)
//!
//! Config file discovery:
//! - Searches current directory and parents for .shelf/config.yaml
//! - Falls back to ~/.shelf/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::library::DEMO_YEAR;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const ENV_YEAR: &str = "SHELF_YEAR";
pub const ENV_FORMAT: &str = "SHELF_FORMAT";

const DEFAULT_DURATION_UNIT: &str = "min";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    /// Year passed to the year filter
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    /// Suffix printed after the total duration
    pub duration_unit: Option<String>,
}

/// How query results are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled plain-text blocks
    #[default]
    Text,

    /// A single pretty-printed JSON object
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// Resolved configuration with every value filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Year passed to the year filter
    pub year: i32,
    /// Output format
    pub format: OutputFormat,
    /// Suffix printed after the total duration
    pub duration_unit: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            year: DEMO_YEAR,
            format: OutputFormat::default(),
            duration_unit: DEFAULT_DURATION_UNIT.to_string(),
            config_file: None,
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".shelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Find config file from the current directory, then the home directory
fn find_config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_file_from(&cwd))
    {
        return Some(path);
    }

    let home_config = dirs::home_dir()?.join(".shelf").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge config file and environment over the defaults
fn resolve(
    config_file: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(ref path) = config_file {
        let config = load_config_file(path)?;

        if let Some(year) = config.demo.year {
            resolved.year = year;
        }
        if let Some(format) = config.output.format {
            resolved.format = format;
        }
        if let Some(unit) = config.output.duration_unit {
            resolved.duration_unit = unit;
        }
    }

    if let Some(year) = env(ENV_YEAR) {
        resolved.year = year
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", ENV_YEAR, year))?;
    }
    if let Some(format) = env(ENV_FORMAT) {
        resolved.format = format
            .parse()
            .with_context(|| format!("Invalid {}", ENV_FORMAT))?;
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(find_config_file(), |key| std::env::var(key).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
