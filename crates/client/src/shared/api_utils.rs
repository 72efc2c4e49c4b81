//! API utilities for panel-backend communication
//!
//! Provides helpers for constructing API URLs, resolving stored image
//! paths and encoding list-query parameters.

use contracts::domain::common::ListQuery;

use crate::shared::config::{resolve_base_url, Config};

/// Uploads root the backend serves stored files from
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Resolved base URL plus the URL-building helpers on top of it.
///
/// Constructed once from [`Config`] and shared by the HTTP client; there is
/// no global state.
#[derive(Debug, Clone)]
pub struct ApiUrls {
    base_url: String,
}

impl ApiUrls {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: resolve_base_url(base_url),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path
    ///
    /// Absolute URLs pass through unchanged, so the function is idempotent:
    /// `build_url(build_url(p)) == build_url(p)`. Relative paths are joined
    /// to the base URL with exactly one slash at the joint.
    pub fn build_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolve a stored image reference to a displayable URL
    ///
    /// The backend stores images as paths relative to `/uploads/`; older
    /// records carry absolute URLs and some seeded records carry data-URIs.
    /// Empty input resolves to `None`, never an error.
    pub fn resolve_image_url(&self, path_or_url: Option<&str>) -> Option<String> {
        let value = path_or_url?.trim();
        if value.is_empty() {
            return None;
        }
        if is_absolute_url(value) || value.starts_with("data:") {
            return Some(value.to_string());
        }
        Some(self.build_url(&format!(
            "{}{}",
            UPLOADS_PREFIX,
            value.trim_start_matches('/')
        )))
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Encode list-query parameters into a query string ("" when all unset)
pub fn list_query_string(query: &ListQuery) -> String {
    let mut params: Vec<String> = Vec::new();

    if let Some(page) = query.page {
        params.push(format!("page={}", page));
    }
    if let Some(limit) = query.limit {
        params.push(format!("limit={}", limit));
    }
    if let Some(search) = &query.search {
        if !search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
    }
    if let Some(status) = &query.status {
        if !status.is_empty() {
            params.push(format!("status={}", urlencoding::encode(status)));
        }
    }
    if let Some(sort_by) = &query.sort_by {
        params.push(format!("sort_by={}", urlencoding::encode(sort_by)));
        if let Some(ascending) = query.sort_ascending {
            params.push(format!("order={}", if ascending { "asc" } else { "desc" }));
        }
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> ApiUrls {
        ApiUrls::new("http://localhost:5000")
    }

    #[test]
    fn test_build_url_joins_with_single_slash() {
        let urls = ApiUrls::new("http://localhost:5000/");
        assert_eq!(
            urls.build_url("/api/orders"),
            "http://localhost:5000/api/orders"
        );
        assert_eq!(
            urls.build_url("api/orders"),
            "http://localhost:5000/api/orders"
        );
    }

    #[test]
    fn test_build_url_is_idempotent() {
        let urls = urls();
        let once = urls.build_url("/api/orders");
        assert_eq!(urls.build_url(&once), once);
        // absolute foreign URL passes through
        assert_eq!(
            urls.build_url("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_resolve_image_url_cases() {
        let urls = urls();
        assert_eq!(urls.resolve_image_url(None), None);
        assert_eq!(urls.resolve_image_url(Some("")), None);
        assert_eq!(
            urls.resolve_image_url(Some("https://x/y.png")),
            Some("https://x/y.png".to_string())
        );
        assert_eq!(
            urls.resolve_image_url(Some("data:image/png;base64,AAA")),
            Some("data:image/png;base64,AAA".to_string())
        );
        assert_eq!(
            urls.resolve_image_url(Some("foo/bar.png")),
            Some(urls.build_url("/uploads/foo/bar.png"))
        );
        // leading slash does not double up
        assert_eq!(
            urls.resolve_image_url(Some("/foo/bar.png")),
            Some("http://localhost:5000/uploads/foo/bar.png".to_string())
        );
    }

    #[test]
    fn test_list_query_string_empty() {
        assert_eq!(list_query_string(&ListQuery::new()), "");
    }

    #[test]
    fn test_list_query_string_full() {
        let query = ListQuery::new()
            .with_page(1, 10)
            .with_search("чай зелёный")
            .with_status("active")
            .with_sort("name", true);
        let qs = list_query_string(&query);
        assert!(qs.starts_with("?page=1&limit=10"));
        assert!(qs.contains("search=%D1%87%D0%B0%D0%B9%20%D0%B7%D0%B5%D0%BB%D1%91%D0%BD%D1%8B%D0%B9"));
        assert!(qs.contains("status=active"));
        assert!(qs.ends_with("sort_by=name&order=asc"));
    }
}
