use contracts::domain::a009_restaurant::aggregate::{Restaurant, RestaurantDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch restaurants
pub async fn fetch_restaurants(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Vec<Restaurant>, ApiError> {
    let path = format!("{}{}", endpoints::RESTAURANTS, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single restaurant
pub async fn fetch_restaurant(api: &ApiClient, id: &str) -> Result<Option<Restaurant>, ApiError> {
    let body = match api.get(&endpoints::restaurant_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create restaurant. Logo and cover, when present, force a multipart
/// request; either may be sent alone.
pub async fn create_restaurant(
    api: &ApiClient,
    dto: &RestaurantDto,
    logo: Option<FileField>,
    cover: Option<FileField>,
) -> Result<Option<Restaurant>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match image_parts(logo, cover) {
        files if files.is_empty() => {
            api.send_json(Method::POST, endpoints::RESTAURANTS, dto)
                .await?
        }
        files => {
            api.send_multipart(Method::POST, endpoints::RESTAURANTS, form_fields(dto)?, files)
                .await?
        }
    };
    normalize_record(body)
}

/// Update restaurant
pub async fn update_restaurant(
    api: &ApiClient,
    id: &str,
    dto: &RestaurantDto,
    logo: Option<FileField>,
    cover: Option<FileField>,
) -> Result<Option<Restaurant>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::restaurant_by_id(id);
    let body = match image_parts(logo, cover) {
        files if files.is_empty() => api.send_json(Method::PUT, &path, dto).await?,
        files => {
            api.send_multipart(Method::PUT, &path, form_fields(dto)?, files)
                .await?
        }
    };
    normalize_record(body)
}

/// Delete restaurant
pub async fn delete_restaurant(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::restaurant_by_id(id)).await?;
    Ok(())
}

/// Flip the active flag
pub async fn toggle_restaurant_status(
    api: &ApiClient,
    id: &str,
) -> Result<Option<Restaurant>, ApiError> {
    let body = api.post(&endpoints::restaurant_toggle_status(id)).await?;
    normalize_record(body)
}

fn image_parts(
    logo: Option<FileField>,
    cover: Option<FileField>,
) -> Vec<(String, FileField)> {
    let mut files = Vec::new();
    if let Some(file) = logo {
        files.push(("logo".to_string(), file));
    }
    if let Some(file) = cover {
        files.push(("cover".to_string(), file));
    }
    files
}
