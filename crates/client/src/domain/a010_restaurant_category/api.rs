use contracts::domain::a010_restaurant_category::aggregate::{
    RestaurantCategory, RestaurantCategoryDto,
};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch menu categories
pub async fn fetch_categories(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Vec<RestaurantCategory>, ApiError> {
    let path = format!(
        "{}{}",
        endpoints::RESTAURANT_CATEGORIES,
        list_query_string(query)
    );
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single category
pub async fn fetch_category(
    api: &ApiClient,
    id: &str,
) -> Result<Option<RestaurantCategory>, ApiError> {
    let body = match api.get(&endpoints::restaurant_category_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create category. The image, when present, forces a multipart request.
pub async fn create_category(
    api: &ApiClient,
    dto: &RestaurantCategoryDto,
    image: Option<FileField>,
) -> Result<Option<RestaurantCategory>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match image {
        Some(file) => {
            api.send_multipart(
                Method::POST,
                endpoints::RESTAURANT_CATEGORIES,
                form_fields(dto)?,
                vec![("image".to_string(), file)],
            )
            .await?
        }
        None => {
            api.send_json(Method::POST, endpoints::RESTAURANT_CATEGORIES, dto)
                .await?
        }
    };
    normalize_record(body)
}

/// Update category
pub async fn update_category(
    api: &ApiClient,
    id: &str,
    dto: &RestaurantCategoryDto,
    image: Option<FileField>,
) -> Result<Option<RestaurantCategory>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::restaurant_category_by_id(id);
    let body = match image {
        Some(file) => {
            api.send_multipart(
                Method::PUT,
                &path,
                form_fields(dto)?,
                vec![("image".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::PUT, &path, dto).await?,
    };
    normalize_record(body)
}

/// Delete category
pub async fn delete_category(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::restaurant_category_by_id(id)).await?;
    Ok(())
}

/// Flip the active flag
pub async fn toggle_category_status(
    api: &ApiClient,
    id: &str,
) -> Result<Option<RestaurantCategory>, ApiError> {
    let body = api
        .post(&endpoints::restaurant_category_toggle_status(id))
        .await?;
    normalize_record(body)
}
