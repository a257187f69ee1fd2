use rmcp::schemars;
use serde::Deserialize;

use crate::client::ListOptions;
use crate::error::ActivityError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 30;
/// GitHub API maximum page size.
pub const MAX_PER_PAGE: u32 = 100;

/// Standard pagination parameters shared by list tools.
#[derive(Debug, Clone, Copy, Deserialize, schemars::JsonSchema)]
pub struct PaginationParams {
    #[schemars(description = "Page number for pagination (min 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Results per page for pagination (min 1, max 100)")]
    #[serde(default, rename = "perPage")]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Apply defaults and bounds. Zero values are malformed; oversized
    /// page sizes are capped to the API maximum.
    pub fn resolve(&self) -> Result<ListOptions, ActivityError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(ActivityError::Validation(
                "page must be at least 1".to_string(),
            ));
        }

        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 {
            return Err(ActivityError::Validation(
                "perPage must be at least 1".to_string(),
            ));
        }

        Ok(ListOptions {
            page,
            per_page: std::cmp::min(per_page, MAX_PER_PAGE) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, per_page: Option<u32>) -> PaginationParams {
        PaginationParams { page, per_page }
    }

    #[test]
    fn test_defaults_applied() {
        let opts = params(None, None).resolve().unwrap();
        assert_eq!(opts.page, 1);
        assert_eq!(opts.per_page, 30);
    }

    #[test]
    fn test_explicit_values_kept() {
        let opts = params(Some(3), Some(50)).resolve().unwrap();
        assert_eq!(opts.page, 3);
        assert_eq!(opts.per_page, 50);
    }

    #[test]
    fn test_per_page_caps_at_100() {
        let opts = params(None, Some(200)).resolve().unwrap();
        assert_eq!(opts.per_page, 100);
    }

    #[test]
    fn test_zero_page_rejected() {
        assert!(params(Some(0), None).resolve().is_err());
    }

    #[test]
    fn test_zero_per_page_rejected() {
        assert!(params(None, Some(0)).resolve().is_err());
    }

    #[test]
    fn test_per_page_wire_name() {
        let parsed: PaginationParams =
            serde_json::from_str(r#"{"page": 2, "perPage": 10}"#).unwrap();
        assert_eq!(parsed.page, Some(2));
        assert_eq!(parsed.per_page, Some(10));
    }
}
