use contracts::domain::a012_room::aggregate::{Room, RoomDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch rooms across hotels
pub async fn fetch_rooms(api: &ApiClient, query: &ListQuery) -> Result<Vec<Room>, ApiError> {
    let path = format!("{}{}", endpoints::ROOMS, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch rooms of one hotel
pub async fn fetch_hotel_rooms(
    api: &ApiClient,
    hotel_id: &str,
    query: &ListQuery,
) -> Result<Vec<Room>, ApiError> {
    let path = format!(
        "{}{}",
        endpoints::hotel_rooms(hotel_id),
        list_query_string(query)
    );
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single room
pub async fn fetch_room(api: &ApiClient, id: &str) -> Result<Option<Room>, ApiError> {
    let body = match api.get(&endpoints::room_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create room. Gallery images, when present, force a multipart request.
pub async fn create_room(
    api: &ApiClient,
    dto: &RoomDto,
    images: Vec<FileField>,
) -> Result<Option<Room>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = if images.is_empty() {
        api.send_json(Method::POST, endpoints::ROOMS, dto).await?
    } else {
        let files = images
            .into_iter()
            .map(|file| ("images".to_string(), file))
            .collect();
        api.send_multipart(Method::POST, endpoints::ROOMS, form_fields(dto)?, files)
            .await?
    };
    normalize_record(body)
}

/// Update room
pub async fn update_room(
    api: &ApiClient,
    id: &str,
    dto: &RoomDto,
    images: Vec<FileField>,
) -> Result<Option<Room>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::room_by_id(id);
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

/// Delete room
pub async fn delete_room(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::room_by_id(id)).await?;
    Ok(())
}

/// Flip the active flag
pub async fn toggle_room_status(api: &ApiClient, id: &str) -> Result<Option<Room>, ApiError> {
    let body = api.post(&endpoints::room_toggle_status(id)).await?;
    normalize_record(body)
}
