use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;
use serde_json::json;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch products
pub async fn fetch_products(api: &ApiClient, query: &ListQuery) -> Result<Vec<Product>, ApiError> {
    let path = format!("{}{}", endpoints::PRODUCTS, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single product
pub async fn fetch_product(api: &ApiClient, id: &str) -> Result<Option<Product>, ApiError> {
    let body = match api.get(&endpoints::product_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create product. Gallery images, when present, force a multipart request.
pub async fn create_product(
    api: &ApiClient,
    dto: &ProductDto,
    images: Vec<FileField>,
) -> Result<Option<Product>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = if images.is_empty() {
        api.send_json(Method::POST, endpoints::PRODUCTS, dto).await?
    } else {
        let files = images
            .into_iter()
            .map(|file| ("images".to_string(), file))
            .collect();
        api.send_multipart(Method::POST, endpoints::PRODUCTS, form_fields(dto)?, files)
            .await?
    };
    normalize_record(body)
}

/// Update product
pub async fn update_product(
    api: &ApiClient,
    id: &str,
    dto: &ProductDto,
    images: Vec<FileField>,
) -> Result<Option<Product>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::product_by_id(id);
    let body = if images.is_empty() {
        api.send_json(Method::PUT, &path, dto).await?
    } else {
        let files = images
            .into_iter()
            .map(|file| ("images".to_string(), file))
            .collect();
        api.send_multipart(Method::PUT, &path, form_fields(dto)?, files)
            .await?
    };
    normalize_record(body)
}

/// Delete product
pub async fn delete_product(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::product_by_id(id)).await?;
    Ok(())
}

/// Flip the active flag
pub async fn toggle_product_status(api: &ApiClient, id: &str) -> Result<Option<Product>, ApiError> {
    let body = api.post(&endpoints::product_toggle_status(id)).await?;
    normalize_record(body)
}

/// Delete several products in one call
pub async fn bulk_delete_products(api: &ApiClient, ids: &[String]) -> Result<(), ApiError> {
    api.send_json(
        Method::POST,
        endpoints::PRODUCTS_BULK_DELETE,
        &json!({ "ids": ids }),
    )
    .await?;
    Ok(())
}

/// Request a catalog export; returns the download URL when the server
/// responds with one
pub async fn export_products(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Option<String>, ApiError> {
    let path = format!("{}{}", endpoints::PRODUCTS_EXPORT, list_query_string(query));
    let body = api.post(&path).await?;
    let payload: Option<serde_json::Value> = normalize_record(body)?;
    Ok(payload
        .and_then(|value| {
            value
                .get("url")
                .and_then(|url| url.as_str())
                .map(String::from)
        })
        .map(|url| api.urls().build_url(&url)))
}
