use contracts::domain::a008_warehouse::aggregate::{Warehouse, WarehouseDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::ApiClient;

/// Fetch warehouses
pub async fn fetch_warehouses(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Vec<Warehouse>, ApiError> {
    let path = format!("{}{}", endpoints::WAREHOUSES, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single warehouse
pub async fn fetch_warehouse(api: &ApiClient, id: &str) -> Result<Option<Warehouse>, ApiError> {
    let body = match api.get(&endpoints::warehouse_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create warehouse
pub async fn create_warehouse(
    api: &ApiClient,
    dto: &WarehouseDto,
) -> Result<Option<Warehouse>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = api
        .send_json(Method::POST, endpoints::WAREHOUSES, dto)
        .await?;
    normalize_record(body)
}

/// Update warehouse
pub async fn update_warehouse(
    api: &ApiClient,
    id: &str,
    dto: &WarehouseDto,
) -> Result<Option<Warehouse>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = api
        .send_json(Method::PUT, &endpoints::warehouse_by_id(id), dto)
        .await?;
    normalize_record(body)
}

/// Delete warehouse
pub async fn delete_warehouse(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::warehouse_by_id(id)).await?;
    Ok(())
}

/// Flip the active flag
pub async fn toggle_warehouse_status(
    api: &ApiClient,
    id: &str,
) -> Result<Option<Warehouse>, ApiError> {
    let body = api.post(&endpoints::warehouse_toggle_status(id)).await?;
    normalize_record(body)
}
