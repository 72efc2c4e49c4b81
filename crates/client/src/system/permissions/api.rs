use contracts::domain::common::ListQuery;
use contracts::system::permissions::{Permission, PermissionDto};
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::ApiClient;

/// Fetch permissions
pub async fn fetch_permissions(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Vec<Permission>, ApiError> {
    let path = format!("{}{}", endpoints::PERMISSIONS, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single permission
pub async fn fetch_permission(api: &ApiClient, id: &str) -> Result<Option<Permission>, ApiError> {
    let body = match api.get(&endpoints::permission_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create permission
pub async fn create_permission(
    api: &ApiClient,
    dto: &PermissionDto,
) -> Result<Option<Permission>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = api
        .send_json(Method::POST, endpoints::PERMISSIONS, dto)
        .await?;
    normalize_record(body)
}

/// Update permission
pub async fn update_permission(
    api: &ApiClient,
    id: &str,
    dto: &PermissionDto,
) -> Result<Option<Permission>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = api
        .send_json(Method::PUT, &endpoints::permission_by_id(id), dto)
        .await?;
    normalize_record(body)
}

/// Delete permission
pub async fn delete_permission(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::permission_by_id(id)).await?;
    Ok(())
}
