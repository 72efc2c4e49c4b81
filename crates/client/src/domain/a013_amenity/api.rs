use contracts::domain::a013_amenity::aggregate::{Amenity, AmenityDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch amenities
pub async fn fetch_amenities(api: &ApiClient, query: &ListQuery) -> Result<Vec<Amenity>, ApiError> {
    let path = format!("{}{}", endpoints::AMENITIES, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single amenity
pub async fn fetch_amenity(api: &ApiClient, id: &str) -> Result<Option<Amenity>, ApiError> {
    let body = match api.get(&endpoints::amenity_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create amenity. The icon, when present, forces a multipart request.
pub async fn create_amenity(
    api: &ApiClient,
    dto: &AmenityDto,
    icon: Option<FileField>,
) -> Result<Option<Amenity>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match icon {
        Some(file) => {
            api.send_multipart(
                Method::POST,
                endpoints::AMENITIES,
                form_fields(dto)?,
                vec![("icon".to_string(), file)],
            )
            .await?
        }
        None => {
            api.send_json(Method::POST, endpoints::AMENITIES, dto)
                .await?
        }
    };
    normalize_record(body)
}

/// Update amenity
pub async fn update_amenity(
    api: &ApiClient,
    id: &str,
    dto: &AmenityDto,
    icon: Option<FileField>,
) -> Result<Option<Amenity>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::amenity_by_id(id);
    let body = match icon {
        Some(file) => {
            api.send_multipart(
                Method::PUT,
                &path,
                form_fields(dto)?,
                vec![("icon".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::PUT, &path, dto).await?,
    };
    normalize_record(body)
}

/// Delete amenity
pub async fn delete_amenity(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::amenity_by_id(id)).await?;
    Ok(())
}
