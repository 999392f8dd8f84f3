use std::borrow::Cow;

use datamesh_core::catalog::CatalogError;
use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub(crate) fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub(crate) fn internal(message: impl Into<Cow<'static, str>>) -> ErrorData {
    mcp_err(ErrorCode::INTERNAL_ERROR, message)
}

/// Validates a required id argument: non-empty after trimming.
pub(crate) fn require_id<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ErrorData> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(mcp_err(
            ErrorCode::INVALID_PARAMS,
            format!("{name} must be a non-empty string"),
        ));
    }
    Ok(trimmed)
}

pub(crate) fn map_err(err: CatalogError) -> ErrorData {
    match err {
        CatalogError::Upstream { status, body } if status.as_u16() == 404 => mcp_err(
            ErrorCode::RESOURCE_NOT_FOUND,
            format!("catalog entity not found: {body}"),
        ),
        other => internal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use datamesh_core::catalog::StatusCode;

    use super::*;

    #[test]
    fn require_id_trims_surrounding_whitespace() {
        let id = require_id("data_product_id", "  orders  ").expect("id should validate");
        assert_eq!(id, "orders");
    }

    #[test]
    fn require_id_rejects_blank_values() {
        let err = require_id("data_product_id", "   ").expect_err("blank id should fail");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("data_product_id"));
    }

    #[test]
    fn upstream_404_maps_to_resource_not_found() {
        let err = map_err(CatalogError::Upstream {
            status: StatusCode::NOT_FOUND,
            body: "no such contract".to_string(),
        });
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("no such contract"));
    }

    #[test]
    fn other_upstream_failures_map_to_internal_errors() {
        let err = map_err(CatalogError::Upstream {
            status: StatusCode::BAD_GATEWAY,
            body: "gateway".to_string(),
        });
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
