//! Configuration loading and management
//!
//! Every section is optional; missing sections and fields fall back to the
//! defaults below.
//!
//! ```yaml
//! server:
//!   bind: "127.0.0.1:8080"
//!   detailed_errors: false
//! cache:
//!   enabled: true
//!   capacity: 1024
//!   ttl_secs: null
//! pagination:
//!   default_size: 10
//!   max_size: 100
//! status_filter: passthrough
//! cors:
//!   allowed_origins: ["*"]
//! logging:
//!   filter: info
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cache: CacheConfig,
    pub pagination: PaginationConfig,
    pub status_filter: StatusFilter,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,

    /// Send a JSON `{code, message, details}` body with error responses
    pub detailed_errors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            detailed_errors: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("invalid server.bind address '{}'", self.bind))
    }
}

/// Read-through cache in front of every entity service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,

    /// Maximum cached records per entity kind
    pub capacity: usize,

    /// Entry lifetime; entries live until evicted when unset
    pub ttl_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 1024,
            ttl_secs: None,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: 10,
            max_size: 100,
        }
    }
}

/// Behavior of the `/status/{status}` lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Ignore the requested status and return every record
    #[default]
    Passthrough,
    /// Filter on the kind's status field when it has one
    Field,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// `"*"` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;

        if self.cache.capacity == 0 {
            bail!("cache.capacity must be greater than 0");
        }
        if self.pagination.default_size == 0 {
            bail!("pagination.default_size must be greater than 0");
        }
        if self.pagination.max_size == 0 {
            bail!("pagination.max_size must be greater than 0");
        }
        if self.pagination.default_size > self.pagination.max_size {
            bail!(
                "pagination.default_size ({}) exceeds pagination.max_size ({})",
                self.pagination.default_size,
                self.pagination.max_size
            );
        }
        Ok(())
    }
}
