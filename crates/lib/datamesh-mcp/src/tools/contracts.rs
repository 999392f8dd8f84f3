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

/// Parameters for fetching a data contract by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DataContractGetParams {
    pub data_contract_id: String,
}

#[tool_router(router = tool_router_contracts, vis = "pub")]
impl DatameshMcp {
    #[tool(
        description = "Get a data contract by its id, rendered as YAML with schema, quality rules, and terms of use."
    )]
    async fn datacontract_get(
        &self,
        Parameters(params): Parameters<DataContractGetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let id = helpers::require_id("data_contract_id", &params.data_contract_id)?;
        info!(id, "datacontract_get called");
        let contract = self
            .catalog()
            .get_data_contract(id)
            .await
            .map_err(helpers::map_err)?;
        let yaml = shape::to_yaml(&contract)
            .map_err(|err| helpers::internal(format!("failed to render data contract as YAML: {err}")))?;
        Ok(CallToolResult::success(vec![Content::text(yaml)]))
    }
}
