//! Configuration module for the yast CLI.
//!
//! Settings come from a `yast.toml` file; command-line flags override them.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use yassc_lex::{IndentMode, LexConfig};

use crate::error::{Result, YastError};

/// File name looked up in each search location.
pub const CONFIG_FILE_NAME: &str = "yast.toml";

/// Fallback worker count when the CPU count does not fit a `u32`.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Settings read from `yast.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Log at debug level.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer options.
    #[serde(default)]
    pub lex: LexSection,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,

    /// Tokens-specific configuration.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Lexer options as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexSection {
    /// Emit per-token trace events.
    #[serde(default)]
    pub trace: bool,

    /// `width` or `marker`.
    #[serde(default = "default_indent")]
    pub indent: String,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files lexed concurrently.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

/// Tokens-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Default output format, `table` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_indent() -> String {
    IndentMode::default().as_str().to_string()
}

/// One worker per CPU.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for LexSection {
    fn default() -> Self {
        Self {
            trace: false,
            indent: default_indent(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl LexSection {
    /// Builds the lexer configuration, applying command-line overrides.
    pub fn to_lex_config(&self, trace: bool, indent: Option<&str>) -> Result<LexConfig> {
        let indent = indent.unwrap_or(&self.indent);
        let mode: IndentMode = indent.parse().map_err(YastError::Config)?;
        Ok(LexConfig::default()
            .with_trace(self.trace || trace)
            .with_indent(mode))
    }
}

impl Config {
    /// Loads the first `yast.toml` found in the current directory, the
    /// platform config directory (`<config>/yast/`) or the home directory
    /// (as `.yast.toml`). Without one, every setting takes its default.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the file at `path`, failing if it is missing or malformed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(YastError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| YastError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("yast").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_system_config)
            .or_else(Self::check_home_config)
    }
}
