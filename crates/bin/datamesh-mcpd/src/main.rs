//! Daemon entry point for the Data Mesh Manager MCP server.
//!
//! Loads configuration from the environment, builds the catalog client,
//! and serves the MCP protocol over stdio or streamable HTTP.

mod config;

use std::sync::Arc;

use datamesh_core::catalog::{CatalogClient, CatalogConfig};
use datamesh_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DatameshConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr; the stdio transport owns stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()?;

    let config = DatameshConfig::from_args()?;
    info!(host = %config.host, "starting datamesh-mcpd");

    let catalog_config =
        CatalogConfig::new(config.host, config.api_key).with_timeout(config.http_timeout);
    let catalog = Arc::new(CatalogClient::new(&catalog_config)?);

    if config.mcp_serve {
        info!(addr = %config.mcp_http_addr, "serving MCP over streamable HTTP");
        serve_streamable_http(catalog, McpHttpServerConfig::new(config.mcp_http_addr)).await?;
    } else if config.enable_stdio {
        serve_stdio(catalog).await?;
    }
    Ok(())
}
