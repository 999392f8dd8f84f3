use datamesh_core::catalog::ProductFilter;
use datamesh_core::shape;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{DatameshMcp, helpers};

/// Parameters for listing data products.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DataProductListParams {
    /// Search term matched against id, title, and description. Multiple
    /// terms are supported, separated by space.
    pub search_term: Option<String>,
    /// Archetype filter. Typical values: consumer-aligned, aggregate,
    /// source-aligned, application, dataconsumer.
    pub archetype: Option<String>,
    /// Status filter, such as active.
    pub status: Option<String>,
}

/// Parameters for the semantic data product search.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DataProductSearchParams {
    /// Search term matched against the indexed data product information.
    /// Use simple search terms.
    pub search_term: Option<String>,
}

/// Parameters for fetching a data product by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DataProductGetParams {
    pub data_product_id: String,
}

#[tool_router(router = tool_router_products, vis = "pub")]
impl DatameshMcp {
    #[tool(
        description = "List data products in the organization. Optional filters: search_term (matches id, title, description), archetype, status."
    )]
    async fn dataproduct_list(
        &self,
        Parameters(params): Parameters<DataProductListParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let filter = ProductFilter::new(params.search_term, params.archetype, params.status);
        info!(?filter, "dataproduct_list called");
        let products = self
            .catalog()
            .list_data_products(&filter)
            .await
            .map_err(helpers::map_err)?;
        let summaries = shape::summarize_all(&products);
        info!(count = summaries.len(), "dataproduct_list returning summaries");
        Ok(CallToolResult::success(vec![Content::json(summaries)?]))
    }

    #[tool(
        description = "Semantic search for data products matching a specific user question or use case."
    )]
    async fn dataproduct_search(
        &self,
        Parameters(params): Parameters<DataProductSearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        info!(search_term = params.search_term.as_deref(), "dataproduct_search called");
        let products = self
            .catalog()
            .search_data_products(params.search_term.as_deref())
            .await
            .map_err(helpers::map_err)?;
        let summaries = shape::summarize_all(&products);
        info!(count = summaries.len(), "dataproduct_search returning summaries");
        Ok(CallToolResult::success(vec![Content::json(summaries)?]))
    }

    #[tool(
        description = "Get a data product by its id, rendered as YAML with all output ports and server information. Output ports may reference a data contract id usable with datacontract_get."
    )]
    async fn dataproduct_get(
        &self,
        Parameters(params): Parameters<DataProductGetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let id = helpers::require_id("data_product_id", &params.data_product_id)?;
        info!(id, "dataproduct_get called");
        let product = self
            .catalog()
            .get_data_product(id)
            .await
            .map_err(helpers::map_err)?;
        let yaml = shape::to_yaml(&product)
            .map_err(|err| helpers::internal(format!("failed to render data product as YAML: {err}")))?;
        Ok(CallToolResult::success(vec![Content::text(yaml)]))
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;
    use serde_json::Value;

    use super::*;
    use crate::tools::support;

    #[tokio::test]
    async fn blank_data_product_id_fails_without_a_network_call() {
        let server = support::mcp_without_upstream();

        let err = server
            .dataproduct_get(Parameters(DataProductGetParams {
                data_product_id: "   ".to_string(),
            }))
            .await
            .expect_err("blank id should be rejected");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn dataproduct_get_returns_yaml_for_the_requested_id() {
        let server = support::mcp_with_mock().await;

        let result = server
            .dataproduct_get(Parameters(DataProductGetParams {
                data_product_id: " orders ".to_string(),
            }))
            .await
            .expect("fetch should succeed");

        let yaml = support::text_content(&result);
        let entity: Value = serde_yaml::from_str(&yaml).expect("result should be YAML");
        assert_eq!(entity["id"], Value::String("orders".to_string()));
    }

    #[tokio::test]
    async fn dataproduct_list_returns_summaries_in_upstream_order() {
        let server = support::mcp_with_mock().await;

        let result = server
            .dataproduct_list(Parameters(DataProductListParams {
                search_term: None,
                archetype: None,
                status: None,
            }))
            .await
            .expect("listing should succeed");

        let summaries: Vec<Value> =
            serde_json::from_str(&support::text_content(&result)).expect("summary array");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0]["id"], Value::String("orders".to_string()));
        assert_eq!(summaries[1]["id"], Value::String("payments".to_string()));
        assert_eq!(summaries[1]["name"], Value::String("Payments".to_string()));
    }

    #[tokio::test]
    async fn dataproduct_search_summarizes_search_hits() {
        let server = support::mcp_with_mock().await;

        let result = server
            .dataproduct_search(Parameters(DataProductSearchParams {
                search_term: Some("order events".to_string()),
            }))
            .await
            .expect("search should succeed");

        let summaries: Vec<Value> =
            serde_json::from_str(&support::text_content(&result)).expect("summary array");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0]["owner"], Value::String("team-checkout".to_string()));
    }
}
