//! MCP tool modules.
//!
//! Tools are grouped by domain: data product discovery and data contract
//! retrieval.

pub mod contracts;
pub mod products;

#[cfg(test)]
pub(crate) mod support {
    use axum::Router;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Json, Response};
    use axum::routing::get;
    use datamesh_core::catalog::{CatalogClient, CatalogConfig};
    use serde_json::{Value, json};

    use crate::DatameshMcp;

    async fn list_products() -> Json<Value> {
        Json(json!([
            {"id": "orders", "title": "Orders", "owner": "team-checkout", "status": "active"},
            {"id": "payments", "info": {"title": "Payments", "owner": "team-billing"}},
        ]))
    }

    async fn search_products() -> Json<Value> {
        Json(json!({
            "results": [
                {"id": "orders", "name": "Orders", "ownerId": "team-checkout"},
            ]
        }))
    }

    async fn get_product(Path(id): Path<String>) -> Json<Value> {
        Json(json!({
            "id": id,
            "info": {"title": "Orders", "owner": "team-checkout"},
            "outputPorts": [],
        }))
    }

    async fn get_contract(Path(id): Path<String>) -> Response {
        if id == "missing" {
            return (StatusCode::NOT_FOUND, "data contract not found").into_response();
        }
        Json(json!({"id": id, "terms": {"usage": "internal reporting only"}})).into_response()
    }

    /// Spawns a mock catalog API and returns a server wired to it.
    pub(crate) async fn mcp_with_mock() -> DatameshMcp {
        let app = Router::new()
            .route("/api/dataproducts", get(list_products))
            .route("/api/dataproducts/:id", get(get_product))
            .route("/api/datacontracts/:id", get(get_contract))
            .route("/api/search", get(search_products));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock listener");
        let addr = listener.local_addr().expect("mock listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock catalog server");
        });

        let config = CatalogConfig::new(format!("http://{addr}"), "dmm_test_key");
        DatameshMcp::new(CatalogClient::new(&config).expect("catalog client should build"))
    }

    /// Server pointed at an address nothing listens on, so a tool call that
    /// reaches the network fails with a transport error rather than the
    /// validation error under test.
    pub(crate) fn mcp_without_upstream() -> DatameshMcp {
        let config = CatalogConfig::new("http://127.0.0.1:9", "dmm_test_key");
        DatameshMcp::new(CatalogClient::new(&config).expect("catalog client should build"))
    }

    /// Extracts the first text block of a tool result via its wire shape.
    pub(crate) fn text_content(result: &rmcp::model::CallToolResult) -> String {
        let value = serde_json::to_value(result).expect("tool result should serialize");
        value["content"][0]["text"]
            .as_str()
            .expect("tool result should carry text")
            .to_string()
    }
}
