use clap::{Parser, builder::BoolishValueParser};
use fbpage_core::GraphConfig;
use fbpage_core::config::{
    ACCESS_TOKEN_SETTING,
    DEFAULT_GRAPH_API_VERSION,
    LEGACY_ACCESS_TOKEN_SETTING,
    PAGE_ID_SETTING,
    resolve_access_token,
};
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_API_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "fbpage-mcpd", version, about = "Facebook Page MCP and REST daemon.")]
struct CliArgs {
    #[arg(long, env = ACCESS_TOKEN_SETTING, hide_env_values = true)]
    access_token: Option<String>,

    #[arg(long, env = LEGACY_ACCESS_TOKEN_SETTING, hide_env_values = true)]
    legacy_access_token: Option<String>,

    #[arg(long, env = PAGE_ID_SETTING)]
    page_id: Option<String>,

    #[arg(
        long,
        env = "FACEBOOK_GRAPH_API_VERSION",
        default_value = DEFAULT_GRAPH_API_VERSION
    )]
    api_version: String,

    #[arg(
        long = "stdio",
        env = "FBPAGE_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "FBPAGE_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(
        long,
        env = "FBPAGE_API_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    api_serve: bool,

    #[arg(long, env = "FBPAGE_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(long, env = "FBPAGE_API_ADDR", default_value = DEFAULT_API_ADDR)]
    api_addr: SocketAddr,

    #[arg(long, env = "FBPAGE_LOG", default_value = DEFAULT_LOG_FILTER)]
    log: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct FbPageConfig {
    pub access_token: Option<String>,
    pub page_id: Option<String>,
    pub api_version: String,
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub api_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub api_addr: SocketAddr,
    pub log: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value: {value:?}")]
    InvalidSetting { name: &'static str, value: String },
    #[error("no server enabled; set FBPAGE_API_SERVE, FBPAGE_MCP_SERVE or FBPAGE_ENABLE_STDIO")]
    NothingToServe,
}

impl FbPageConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    /// Graph settings handed to the control plane.
    #[must_use]
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::new(self.api_version.clone())
            .with_access_token(self.access_token.clone())
            .with_page_id(self.page_id.clone())
    }
}

impl TryFrom<CliArgs> for FbPageConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_version = args.api_version.trim().to_string();
        if api_version.is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "FACEBOOK_GRAPH_API_VERSION",
                value: args.api_version,
            });
        }

        if !(args.api_serve || args.mcp_serve || args.enable_stdio) {
            return Err(ConfigError::NothingToServe);
        }

        let access_token = resolve_access_token(args.access_token, args.legacy_access_token);
        let page_id = args.page_id.filter(|value| !value.trim().is_empty());

        Ok(Self {
            access_token,
            page_id,
            api_version,
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            api_serve: args.api_serve,
            mcp_http_addr: args.mcp_http_addr,
            api_addr: args.api_addr,
            log: args.log,
        })
    }
}
