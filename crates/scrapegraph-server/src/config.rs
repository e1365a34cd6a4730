use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use scrapegraph_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Optional config file in the working directory (any format `config` reads)
const LOCAL_CONFIG: &str = "scrapegraph-mcp";

/// Prefix for structured env overrides, e.g. `SCRAPEGRAPH_MCP__SERVER__PORT`
const ENV_PREFIX: &str = "SCRAPEGRAPH_MCP";

/// Wire transport between the host and this process
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Transport {
    /// Framed messages over stdin/stdout
    #[default]
    Stdio,
    /// Streamable HTTP on `/mcp`
    Http,
}

impl TryFrom<String> for Transport {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            other => Err(format!(
                "unknown transport '{other}', expected 'stdio' or 'http'"
            )),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// The API key, if one was supplied and is not blank
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default)]
    pub transport: Transport,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Local file: ./scrapegraph-mcp.toml (optional)
    /// 3. Environment variables with SCRAPEGRAPH_MCP__ prefix
    /// 4. Conventional variables: SGAI_API_KEY, MCP_TRANSPORT, HOST, PORT (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let config_builder = config::Config::builder()
            .add_source(config::File::with_name(LOCAL_CONFIG).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config_builder = Self::apply_overrides(config_builder, |name| env::var(name).ok())?;
        Self::from_builder(config_builder)
    }

    fn apply_overrides(
        mut config_builder: ConfigBuilder<DefaultState>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<ConfigBuilder<DefaultState>> {
        const OVERRIDES: [(&str, &str); 4] = [
            ("SGAI_API_KEY", "api.key"),
            ("MCP_TRANSPORT", "server.transport"),
            ("HOST", "server.host"),
            ("PORT", "server.port"),
        ];

        for (var, key) in OVERRIDES {
            if let Some(value) = lookup(var) {
                config_builder = config_builder.set_override(key, value)?;
            }
        }

        Ok(config_builder)
    }

    fn from_builder(config_builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let config = config_builder.build()?;
        let config: Self = config.try_deserialize()?;
        anyhow::ensure!(
            config.api.timeout_secs > 0,
            "api.timeout_secs must be at least 1 second"
        );
        Ok(config)
    }
}
