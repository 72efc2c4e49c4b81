use contracts::domain::a005_taxi_driver::aggregate::{TaxiDriver, TaxiDriverDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch drivers
pub async fn fetch_drivers(api: &ApiClient, query: &ListQuery) -> Result<Vec<TaxiDriver>, ApiError> {
    let path = format!("{}{}", endpoints::TAXI_DRIVERS, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single driver
pub async fn fetch_driver(api: &ApiClient, id: &str) -> Result<Option<TaxiDriver>, ApiError> {
    let body = match api.get(&endpoints::taxi_driver_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create driver. The licence scan, when present, forces a multipart
/// request.
pub async fn create_driver(
    api: &ApiClient,
    dto: &TaxiDriverDto,
    licence_scan: Option<FileField>,
) -> Result<Option<TaxiDriver>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match licence_scan {
        Some(file) => {
            api.send_multipart(
                Method::POST,
                endpoints::TAXI_DRIVERS,
                form_fields(dto)?,
                vec![("licenceScan".to_string(), file)],
            )
            .await?
        }
        None => {
            api.send_json(Method::POST, endpoints::TAXI_DRIVERS, dto)
                .await?
        }
    };
    normalize_record(body)
}

/// Update driver
pub async fn update_driver(
    api: &ApiClient,
    id: &str,
    dto: &TaxiDriverDto,
    licence_scan: Option<FileField>,
) -> Result<Option<TaxiDriver>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::taxi_driver_by_id(id);
    let body = match licence_scan {
        Some(file) => {
            api.send_multipart(
                Method::PUT,
                &path,
                form_fields(dto)?,
                vec![("licenceScan".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::PUT, &path, dto).await?,
    };
    normalize_record(body)
}

/// Delete driver
pub async fn delete_driver(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::taxi_driver_by_id(id)).await?;
    Ok(())
}

/// Flip the active flag
pub async fn toggle_driver_status(
    api: &ApiClient,
    id: &str,
) -> Result<Option<TaxiDriver>, ApiError> {
    let body = api.post(&endpoints::taxi_driver_toggle_status(id)).await?;
    normalize_record(body)
}
