//! Daemon entry point for the Facebook Page MCP server.
//!
//! Loads configuration from the environment, builds the page control plane,
//! and serves the REST surface and the MCP protocol side by side.

mod config;

use fbpage_api::{ApiServer, ApiServerConfig};
use fbpage_core::PageControlPlane;
use fbpage_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::FbPageConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenv::dotenv().ok();
    let config = FbPageConfig::from_args()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log)?)
        .with_writer(std::io::stderr)
        .init();

    let graph = config.graph_config();
    if !graph.has_access_token() {
        warn!("no page access token configured; page operations will fail until one is set");
    }
    info!(api_version = graph.api_version(), "graph api configured");
    let control = PageControlPlane::with_reqwest(graph)?;

    let mut servers: JoinSet<Result<(), BoxError>> = JoinSet::new();
    if config.api_serve {
        let server = ApiServer::new(control.clone(), ApiServerConfig::new(config.api_addr));
        servers.spawn(server.serve());
    }
    if config.mcp_serve {
        let http = McpHttpServerConfig::new(config.mcp_http_addr);
        servers.spawn(serve_streamable_http(control.clone(), http));
    }
    if config.enable_stdio {
        servers.spawn(serve_stdio(control));
    }

    while let Some(joined) = servers.join_next().await {
        joined??;
    }
    Ok(())
}
