use contracts::domain::a003_grocery::aggregate::{Grocery, GroceryDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch grocery items
pub async fn fetch_groceries(api: &ApiClient, query: &ListQuery) -> Result<Vec<Grocery>, ApiError> {
    let path = format!("{}{}", endpoints::GET_ALL_GROCERY, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single grocery item
pub async fn fetch_grocery(api: &ApiClient, id: &str) -> Result<Option<Grocery>, ApiError> {
    let body = match api.get(&endpoints::get_grocery(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create grocery item. Images, when present, force a multipart request.
pub async fn create_grocery(
    api: &ApiClient,
    dto: &GroceryDto,
    images: Vec<FileField>,
) -> Result<Option<Grocery>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = if images.is_empty() {
        api.send_json(Method::POST, endpoints::CREATE_GROCERY, dto)
            .await?
    } else {
        let files = images
            .into_iter()
            .map(|file| ("images".to_string(), file))
            .collect();
        api.send_multipart(
            Method::POST,
            endpoints::CREATE_GROCERY,
            form_fields(dto)?,
            files,
        )
        .await?
    };
    normalize_record(body)
}

/// Update grocery item
pub async fn update_grocery(
    api: &ApiClient,
    id: &str,
    dto: &GroceryDto,
    images: Vec<FileField>,
) -> Result<Option<Grocery>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::update_grocery(id);
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

/// Delete grocery item
pub async fn delete_grocery(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::delete_grocery(id)).await?;
    Ok(())
}

/// Flip the active flag
pub async fn toggle_grocery_status(api: &ApiClient, id: &str) -> Result<Option<Grocery>, ApiError> {
    let body = api.post(&endpoints::grocery_toggle_status(id)).await?;
    normalize_record(body)
}
