use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_HOST: &str = "https://app.datamesh-manager.com";
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "datamesh-mcpd", version, about = "Data Mesh Manager MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "DATAMESH_MANAGER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    #[arg(long, env = "DATAMESH_MANAGER_API_KEY")]
    api_key: Option<String>,

    #[arg(
        long,
        env = "DATAMESH_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_HTTP_TIMEOUT_SECS
    )]
    http_timeout_secs: u64,

    #[arg(
        long = "stdio",
        env = "DATAMESH_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "DATAMESH_MCP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "DATAMESH_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct DatameshConfig {
    pub host: String,
    pub api_key: String,
    pub http_timeout: Duration,
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl DatameshConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for DatameshConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingSetting("DATAMESH_MANAGER_API_KEY"))?;

        if args.host.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "DATAMESH_MANAGER_HOST",
                value: args.host,
            });
        }
        if args.http_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "DATAMESH_HTTP_TIMEOUT_SECS",
                value: args.http_timeout_secs.to_string(),
            });
        }
        if !args.enable_stdio && !args.mcp_serve {
            return Err(ConfigError::InvalidSetting {
                name: "DATAMESH_ENABLE_STDIO",
                value: "no transport enabled".to_string(),
            });
        }

        Ok(Self {
            host: args.host,
            api_key,
            http_timeout: Duration::from_secs(args.http_timeout_secs),
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            host: DEFAULT_HOST.to_string(),
            api_key: Some("dmm_test_key".to_string()),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            enable_stdio: true,
            mcp_serve: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
        }
    }

    #[test]
    fn missing_api_key_is_a_startup_error() {
        let mut args = base_args();
        args.api_key = None;

        let err = DatameshConfig::try_from(args).expect_err("config should be rejected");
        assert!(matches!(
            err,
            ConfigError::MissingSetting("DATAMESH_MANAGER_API_KEY")
        ));
    }

    #[test]
    fn blank_api_key_is_a_startup_error() {
        let mut args = base_args();
        args.api_key = Some("   ".to_string());

        let err = DatameshConfig::try_from(args).expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::MissingSetting(_)));
    }

    #[test]
    fn disabling_every_transport_is_rejected() {
        let mut args = base_args();
        args.enable_stdio = false;
        args.mcp_serve = false;

        let err = DatameshConfig::try_from(args).expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::InvalidSetting { .. }));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = DatameshConfig::try_from(base_args()).expect("config should parse");

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.enable_stdio);
        assert!(!config.mcp_serve);
    }
}
