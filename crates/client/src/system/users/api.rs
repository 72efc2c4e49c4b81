use contracts::domain::common::ListQuery;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::ApiClient;

/// Fetch all users
pub async fn fetch_users(api: &ApiClient, query: &ListQuery) -> Result<Vec<User>, ApiError> {
    let path = format!("{}{}", endpoints::USERS, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single user
pub async fn fetch_user(api: &ApiClient, id: &str) -> Result<Option<User>, ApiError> {
    let body = match api.get(&endpoints::user_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create new user, returns the created id
pub async fn create_user(api: &ApiClient, dto: &CreateUserDto) -> Result<String, ApiError> {
    let body = api.send_json(Method::POST, endpoints::USERS, dto).await?;
    let created: Option<serde_json::Value> = normalize_record(body)?;
    Ok(created
        .and_then(|value| value.get("id").and_then(|id| id.as_str()).map(String::from))
        .unwrap_or_default())
}

/// Update user
pub async fn update_user(api: &ApiClient, dto: &UpdateUserDto) -> Result<(), ApiError> {
    api.send_json(Method::PUT, &endpoints::user_by_id(&dto.id), dto)
        .await?;
    Ok(())
}

/// Delete user
pub async fn delete_user(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::user_by_id(id)).await?;
    Ok(())
}

/// Change password
pub async fn change_password(api: &ApiClient, dto: &ChangePasswordDto) -> Result<(), ApiError> {
    api.send_json(
        Method::POST,
        &endpoints::user_change_password(&dto.user_id),
        dto,
    )
    .await?;
    Ok(())
}
