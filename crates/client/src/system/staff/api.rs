use contracts::domain::common::ListQuery;
use contracts::system::staff::{StaffDto, StaffMember};
use reqwest::Method;
use serde_json::json;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch staff members
pub async fn fetch_staff(api: &ApiClient, query: &ListQuery) -> Result<Vec<StaffMember>, ApiError> {
    let path = format!("{}{}", endpoints::STAFF, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single staff member
pub async fn fetch_staff_member(
    api: &ApiClient,
    id: &str,
) -> Result<Option<StaffMember>, ApiError> {
    let body = match api.get(&endpoints::staff_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create staff member. The id-document scan, when present, forces a
/// multipart request.
pub async fn create_staff(
    api: &ApiClient,
    dto: &StaffDto,
    id_document: Option<FileField>,
) -> Result<Option<StaffMember>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match id_document {
        Some(file) => {
            api.send_multipart(
                Method::POST,
                endpoints::STAFF,
                form_fields(dto)?,
                vec![("id_document".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::POST, endpoints::STAFF, dto).await?,
    };
    normalize_record(body)
}

/// Update staff member
pub async fn update_staff(
    api: &ApiClient,
    id: &str,
    dto: &StaffDto,
    id_document: Option<FileField>,
) -> Result<Option<StaffMember>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::staff_by_id(id);
    let body = match id_document {
        Some(file) => {
            api.send_multipart(
                Method::PUT,
                &path,
                form_fields(dto)?,
                vec![("id_document".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::PUT, &path, dto).await?,
    };
    normalize_record(body)
}

/// Delete staff member
pub async fn delete_staff(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::staff_by_id(id)).await?;
    Ok(())
}

/// Attach a staff member to a warehouse
pub async fn assign_to_warehouse(
    api: &ApiClient,
    staff_id: &str,
    warehouse_id: &str,
) -> Result<Option<StaffMember>, ApiError> {
    let body = api
        .send_json(
            Method::POST,
            &endpoints::staff_assign_warehouse(staff_id),
            &json!({ "warehouse_id": warehouse_id }),
        )
        .await?;
    normalize_record(body)
}
