//! Pure response shaping: compact summaries for listings and verbatim YAML
//! for single-entity retrieval. No I/O.

use serde::{Deserialize, Serialize};

use crate::model::{DataProduct, ServerInfo};

const MISSING: &str = "N/A";

/// Compact listing record for one data product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProductSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub output_ports: Vec<OutputPortSummary>,
}

/// Output port id and connection metadata within a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputPortSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerInfo>,
}

/// Reduces one data product to its summary record.
///
/// Total and defaulting: missing string fields become `"N/A"` and missing
/// output ports become an empty sequence. Listing, search, and flat/nested
/// response shapes all resolve through the same field precedence.
#[must_use]
pub fn summarize(product: &DataProduct) -> DataProductSummary {
    let info = product.info.as_ref();
    let output_ports = product
        .output_ports
        .iter()
        .map(|port| OutputPortSummary {
            id: port.id.clone().unwrap_or_else(missing),
            server: port.server.clone(),
        })
        .collect();

    DataProductSummary {
        id: product.id.clone().unwrap_or_else(missing),
        name: first([
            product.title.as_ref(),
            info.and_then(|i| i.title.as_ref()),
            product.name.as_ref(),
        ]),
        description: first([
            product.description.as_ref(),
            info.and_then(|i| i.description.as_ref()),
        ]),
        owner: first([
            product.owner.as_ref(),
            info.and_then(|i| i.owner.as_ref()),
            product.owner_id.as_ref(),
        ]),
        status: product
            .status
            .clone()
            .or_else(|| info.and_then(|i| i.status.clone())),
        output_ports,
    }
}

/// Summarizes every element of a listing, preserving upstream order.
#[must_use]
pub fn summarize_all(products: &[DataProduct]) -> Vec<DataProductSummary> {
    products.iter().map(summarize).collect()
}

/// Renders an upstream entity verbatim as YAML, nested structure and field
/// order intact (`serde_json` runs with `preserve_order`).
///
/// # Errors
/// Returns an error if the value cannot be represented as YAML.
pub fn to_yaml(entity: &serde_json::Value) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(entity)
}

fn first<'a>(candidates: impl IntoIterator<Item = Option<&'a String>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .next()
        .cloned()
        .unwrap_or_else(missing)
}

fn missing() -> String {
    MISSING.to_string()
}
