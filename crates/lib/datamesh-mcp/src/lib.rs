//! MCP server implementation for datamesh-mcp.
//!
//! This crate wires the catalog client into rmcp tool handlers and exposes
//! the MCP-facing API surface for data product discovery.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use datamesh_core::catalog::CatalogClient;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};

const SERVER_INSTRUCTIONS: &str = r"You are connected to the Data Mesh Manager through the Model Context Protocol (MCP).

Data Mesh Manager lists data products in the organization that you can use to get domain-specific data.

1. DISCOVERING DATA PRODUCTS
   - Use `dataproduct_list` to list data products. Optional filters: `search_term`
     (matches id, title, and description), `archetype`, and `status`.
   - Alternatively, use `dataproduct_search` for a semantic search where more
     information is indexed.

2. GETTING DATA PRODUCT DETAILS
   - Both tools above return the data product id.
   - Use `dataproduct_get` to fetch the full data product as YAML. A data product
     contains a list of output ports with server information to physically access
     the data (e.g. Databricks, Snowflake). An output port can be associated with
     a data contract.

3. WORKING WITH DATA CONTRACTS
   - If an output port links to a data contract, use `datacontract_get` to fetch it.
   - A data contract contains the terms of use for accessing the data; adhere to
     them when accessing the data.
   - A data contract contains the schema of the data model. Use it to judge whether
     the data product fits your use case and when building queries (e.g. SQL).

- `health` returns `ok`.";

/// MCP server wrapper around the catalog client and tool routers.
#[derive(Clone)]
pub struct DatameshMcp {
    tool_router: ToolRouter<Self>,
    catalog: Arc<CatalogClient>,
}

impl DatameshMcp {
    /// Creates a new server using a catalog client by value.
    #[must_use]
    pub fn new(catalog: CatalogClient) -> Self {
        Self::with_catalog(Arc::new(catalog))
    }

    /// Creates a new server using a shared catalog client handle.
    #[must_use]
    pub fn with_catalog(catalog: Arc<CatalogClient>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_products()
            + Self::tool_router_contracts();
        Self {
            tool_router,
            catalog,
        }
    }

    pub(crate) fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl DatameshMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for DatameshMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
