use contracts::domain::a011_dish::aggregate::{Dish, DishDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch dishes
pub async fn fetch_dishes(api: &ApiClient, query: &ListQuery) -> Result<Vec<Dish>, ApiError> {
    let path = format!("{}{}", endpoints::DISHES, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single dish
pub async fn fetch_dish(api: &ApiClient, id: &str) -> Result<Option<Dish>, ApiError> {
    let body = match api.get(&endpoints::dish_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create dish. The image, when present, forces a multipart request.
pub async fn create_dish(
    api: &ApiClient,
    dto: &DishDto,
    image: Option<FileField>,
) -> Result<Option<Dish>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match image {
        Some(file) => {
            api.send_multipart(
                Method::POST,
                endpoints::DISHES,
                form_fields(dto)?,
                vec![("image".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::POST, endpoints::DISHES, dto).await?,
    };
    normalize_record(body)
}

/// Update dish
pub async fn update_dish(
    api: &ApiClient,
    id: &str,
    dto: &DishDto,
    image: Option<FileField>,
) -> Result<Option<Dish>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::dish_by_id(id);
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

/// Delete dish
pub async fn delete_dish(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::dish_by_id(id)).await?;
    Ok(())
}

/// Flip the stop-list flag
pub async fn toggle_dish_status(api: &ApiClient, id: &str) -> Result<Option<Dish>, ApiError> {
    let body = api.post(&endpoints::dish_toggle_status(id)).await?;
    normalize_record(body)
}
