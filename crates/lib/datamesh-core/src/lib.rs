//! Core types and services for datamesh-mcp.
//!
//! This crate owns the HTTP client for the Data Mesh Manager catalog API,
//! the typed slice of the catalog data model this server reads, and the
//! pure response shaping used by the MCP tool layer.

pub mod catalog;
pub mod model;
pub mod shape;
