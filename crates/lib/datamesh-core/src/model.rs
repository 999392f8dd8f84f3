//! Typed records for the slice of the catalog API this server reads.
//!
//! The upstream API emits data products in both a flat shape and one with a
//! nested `info` block, and search hits carry `name`/`ownerId` instead of
//! `title`/`owner`. A single record with optional fields absorbs all three;
//! field resolution happens in [`crate::shape`].

use serde::{Deserialize, Serialize};

/// A data product as returned by the catalog listing and search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProduct {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub owner_id: Option<String>,
    pub status: Option<String>,
    pub archetype: Option<String>,
    pub info: Option<ProductInfo>,
    #[serde(default)]
    pub output_ports: Vec<OutputPort>,
}

/// Nested `info` block some catalog responses carry instead of flat fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub status: Option<String>,
}

/// An access point of a data product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputPort {
    pub id: Option<String>,
    pub server: Option<ServerInfo>,
}

/// Connection metadata for an output port.
///
/// Only the platform type and location are modeled explicitly; any further
/// connection fields (catalog, schema, host, ...) are kept verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(rename = "type")]
    pub platform: Option<String>,
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Envelope returned by the catalog search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<DataProduct>,
}
