//! HTTP client for the Data Mesh Manager catalog API.
//!
//! One authenticated GET per call, no retries, no caching. Failures map to
//! a small typed taxonomy and propagate directly to the caller.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

pub use reqwest::StatusCode;

use crate::model::{DataProduct, SearchResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable connection settings for the catalog API.
///
/// Built once at startup from process configuration and passed into
/// [`CatalogClient::new`]; the credential is attached to every request.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Failure of a single catalog call.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure: DNS, connect, reset, timeout.
    Transport(reqwest::Error),
    /// Non-success HTTP response; status and body kept for diagnostics.
    Upstream { status: StatusCode, body: String },
    /// Successful response whose body is not the expected JSON shape.
    Decode(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "catalog request failed: {err}"),
            Self::Upstream { status, body } => {
                write!(f, "catalog responded with status {status}: {body}")
            }
            Self::Decode(err) => write!(f, "catalog response was not valid JSON: {err}"),
        }
    }
}

impl Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

/// Optional criteria for the data product listing endpoint.
///
/// Constructed per call and discarded; blank values are normalized to
/// absent so they never reach the request.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search_term: Option<String>,
    pub archetype: Option<String>,
    pub status: Option<String>,
}

impl ProductFilter {
    /// Builds a filter, trimming each value and dropping blanks.
    #[must_use]
    pub fn new(
        search_term: Option<String>,
        archetype: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self {
            search_term: normalize(search_term),
            archetype: normalize(archetype),
            status: normalize(status),
        }
    }

    /// Query parameters for the listing endpoint, non-empty filters only.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(term) = self.search_term.as_deref() {
            params.push(("q", term));
        }
        if let Some(archetype) = self.archetype.as_deref() {
            params.push(("archetype", archetype));
        }
        if let Some(status) = self.status.as_deref() {
            params.push(("status", status));
        }
        params
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Client for the Data Mesh Manager catalog API.
///
/// Wraps a pooled `reqwest` client; cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    /// Creates a client from immutable startup configuration.
    ///
    /// # Errors
    /// Returns [`CatalogError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::Transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists data products, forwarding only the non-empty filters.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] on transport failure, non-success status,
    /// or a body that does not decode as a data product array.
    pub async fn list_data_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<DataProduct>, CatalogError> {
        let params = filter.query_params();
        let value = self.get_json("/api/dataproducts", &params).await?;
        decode(value)
    }

    /// Searches data products by free text via the search endpoint.
    ///
    /// Blank or absent terms are omitted; ranking is upstream's concern.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] on transport failure, non-success status,
    /// or a body that does not decode as a search envelope.
    pub async fn search_data_products(
        &self,
        search_term: Option<&str>,
    ) -> Result<Vec<DataProduct>, CatalogError> {
        let term = search_term.map(str::trim).filter(|t| !t.is_empty());
        let mut params = vec![("resourceType", "DATA_PRODUCT")];
        if let Some(term) = term {
            params.push(("searchTerm", term));
        }
        let value = self.get_json("/api/search", &params).await?;
        let response: SearchResponse = decode(value)?;
        Ok(response.results)
    }

    /// Fetches a single data product verbatim.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] on transport failure, non-success status,
    /// or a non-JSON body.
    pub async fn get_data_product(&self, id: &str) -> Result<serde_json::Value, CatalogError> {
        let path = format!("/api/dataproducts/{}", urlencoding::encode(id));
        self.get_json(&path, &[]).await
    }

    /// Fetches a single data contract verbatim.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] on transport failure, non-success status,
    /// or a non-JSON body.
    pub async fn get_data_contract(&self, id: &str) -> Result<serde_json::Value, CatalogError> {
        let path = format!("/api/datacontracts/{}", urlencoding::encode(id));
        self.get_json(&path, &[]).await
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, CatalogError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, params = query.len(), "catalog GET");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(CatalogError::Transport)?;
        if !status.is_success() {
            return Err(CatalogError::Upstream { status, body });
        }
        serde_json::from_str(&body).map_err(CatalogError::Decode)
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, CatalogError> {
    serde_json::from_value(value).map_err(CatalogError::Decode)
}
