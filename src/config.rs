//! Configuration management for the string calculator CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file discovery and loading
//!
//! Command-line flags always win over values from the config file.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calculator::DEFAULT_DELIMITER;

/// Name of the project-local config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".strcalc.toml";

/// Command-line arguments for the string calculator
#[derive(Debug, Parser)]
#[command(name = "strcalc")]
#[command(about = "Sum a delimited list of numbers")]
#[command(version)]
pub struct Args {
    /// Numbers to sum, e.g. "1,2" or "//;\n1;2"
    #[arg(help = "Input string; read from stdin when omitted")]
    pub input: Option<String>,

    /// Read the input from a file instead of the argument
    #[arg(long, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Interpret backslash escapes (\n, \t, \r, \\) in the input argument
    #[arg(short = 'e', long, requires = "input")]
    pub escapes: bool,

    /// Default delimiter for input without a header
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Explicit config file path
    #[arg(long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip config file discovery
    #[arg(long)]
    pub no_config: bool,

    /// Log level for the calculator
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of a `.strcalc.toml` / `config.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub default_delimiter: Option<String>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, Some(path))
    }

    /// Parse config content from a TOML string
    pub fn parse(content: &str, source_path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).with_context(|| match source_path {
            Some(path) => format!("Failed to parse config TOML: {}", path.display()),
            None => "Failed to parse config TOML".to_string(),
        })
    }
}

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Argument(String),
    File(PathBuf),
    Stdin,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputSource,
    /// Whether backslash escapes in an argument input are expanded
    pub escapes: bool,
    pub default_delimiter: String,
    pub format: OutputFormat,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from parsed command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = if args.no_config {
            None
        } else if let Some(explicit) = args.config {
            Some(explicit)
        } else {
            Self::discover_config_file()?
        };

        let file_config = match &config_path {
            Some(path) => {
                log::debug!("Loading config file: {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        let default_delimiter = args
            .delimiter
            .or(file_config.default_delimiter)
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());
        if default_delimiter.is_empty() {
            anyhow::bail!("Default delimiter must not be empty");
        }

        let input = match (args.input, args.file) {
            (Some(text), _) => InputSource::Argument(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        };

        Ok(Config {
            input,
            escapes: args.escapes,
            default_delimiter,
            format: args.format.or(file_config.format).unwrap_or_default(),
            config_path,
        })
    }

    /// Candidate config files, highest priority first
    pub fn config_search_paths() -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        // Current working directory: ./.strcalc.toml
        paths.push(std::env::current_dir()?.join(PROJECT_CONFIG_FILE));

        // User global config: ~/.config/strcalc/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("strcalc").join("config.toml"));
        }

        Ok(paths)
    }

    fn discover_config_file() -> Result<Option<PathBuf>> {
        Ok(Self::config_search_paths()?
            .into_iter()
            .find(|path| path.is_file()))
    }
}
