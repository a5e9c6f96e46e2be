//! Configuration module for the benchmark driver.
//!
//! Supports both command-line arguments and TOML configuration file.
//! CLI arguments take precedence over config file values. The defaults
//! match the classic raw-socket PING benchmark: one million requests
//! against localhost:6379.

use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Command-line arguments for the benchmark driver
#[derive(Parser, Debug)]
#[command(name = "resp-bench")]
#[command(author = "resp-bench authors")]
#[command(version = "0.1.0")]
#[command(about = "A round-trip throughput benchmark for RESP servers", long_about = None)]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Server host to connect to (e.g., localhost)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Server port to connect to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of request/response round trips to perform
    #[arg(short = 'n', long)]
    pub requests: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// TOML configuration file structure
#[derive(Debug, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub bench: BenchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Target server configuration
#[derive(Debug, Deserialize)]
pub struct TargetConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Benchmark loop configuration
#[derive(Debug, Deserialize)]
pub struct BenchConfig {
    /// Number of round trips
    #[serde(default = "default_requests")]
    pub requests: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            requests: default_requests(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6379
}

fn default_requests() -> u64 {
    1_000_000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Final resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub requests: u64,
    pub log_level: String,
}

impl Config {
    /// Load configuration from CLI args and optional TOML file.
    /// CLI arguments take precedence over TOML file values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(CliArgs::parse())
    }

    /// Merge parsed CLI args with the TOML file they may point at.
    pub fn resolve(cli: CliArgs) -> Result<Self, ConfigError> {
        // Load TOML config if specified
        let toml_config = if let Some(ref config_path) = cli.config {
            let contents = std::fs::read_to_string(config_path)
                .map_err(|e| ConfigError::FileRead(config_path.clone(), e))?;
            toml::from_str(&contents)
                .map_err(|e| ConfigError::TomlParse(config_path.clone(), e))?
        } else {
            TomlConfig::default()
        };

        Ok(Config {
            host: cli.host.unwrap_or(toml_config.target.host),
            port: cli.port.unwrap_or(toml_config.target.port),
            requests: cli.requests.unwrap_or(toml_config.bench.requests),
            log_level: if cli.log_level != "info" {
                cli.log_level
            } else {
                toml_config.logging.level
            },
        })
    }

    /// Target address in `host:port` form, as passed to the connector.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    FileRead(PathBuf, std::io::Error),
    TomlParse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileRead(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::TomlParse(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
