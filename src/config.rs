use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub db_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS; empty means allow all (local dev)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: vec![],
        }
    }
}

/// Graph build and query bounds
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Max bills ingested per rebuild (most recent action first)
    #[serde(default = "default_bill_limit")]
    pub bill_limit: usize,
    /// Max cosponsorship rows ingested per rebuild
    #[serde(default = "default_cosponsor_limit")]
    pub cosponsor_limit: usize,
    /// Max aggregated (member, donor) contribution rows per rebuild
    #[serde(default = "default_contribution_limit")]
    pub contribution_limit: usize,
    /// Hard cap on the depth parameter of connection queries
    #[serde(default = "default_max_connection_depth")]
    pub max_connection_depth: usize,
    /// Connections returned per response (total count is still reported)
    #[serde(default = "default_connection_result_cap")]
    pub connection_result_cap: usize,
    /// Max hops explored by shortest-path queries
    #[serde(default = "default_path_max_depth")]
    pub path_max_depth: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            bill_limit: default_bill_limit(),
            cosponsor_limit: default_cosponsor_limit(),
            contribution_limit: default_contribution_limit(),
            max_connection_depth: default_max_connection_depth(),
            connection_result_cap: default_connection_result_cap(),
            path_max_depth: default_path_max_depth(),
        }
    }
}

/// Response cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_seconds: default_cache_ttl(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_bill_limit() -> usize {
    5000
}

fn default_cosponsor_limit() -> usize {
    20000
}

fn default_contribution_limit() -> usize {
    5000
}

fn default_max_connection_depth() -> usize {
    4
}

fn default_connection_result_cap() -> usize {
    100
}

fn default_path_max_depth() -> usize {
    6
}

fn default_cache_capacity() -> usize {
    1000
}

fn default_cache_ttl() -> u64 {
    60
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in LEGISGRAPH_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let config_path = std::env::var("LEGISGRAPH_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .context("Failed to parse config.toml")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.graph.bill_limit == 0 {
            anyhow::bail!("graph.bill_limit must be greater than 0");
        }

        if self.graph.max_connection_depth == 0 {
            anyhow::bail!("graph.max_connection_depth must be greater than 0");
        }

        if self.graph.path_max_depth == 0 {
            anyhow::bail!("graph.path_max_depth must be greater than 0");
        }

        if self.graph.connection_result_cap == 0 {
            anyhow::bail!("graph.connection_result_cap must be greater than 0");
        }

        if self.cache.capacity == 0 {
            anyhow::bail!("cache.capacity must be greater than 0");
        }

        Ok(())
    }

    /// Get database path
    pub fn db_path(&self) -> &Path {
        &self.database.db_path
    }

    /// Socket address string for the HTTP server
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
