use contracts::domain::a006_taxi_vehicle::aggregate::{TaxiVehicle, TaxiVehicleDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;
use serde_json::json;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch vehicles
pub async fn fetch_vehicles(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Vec<TaxiVehicle>, ApiError> {
    let path = format!("{}{}", endpoints::TAXI_VEHICLES, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single vehicle
pub async fn fetch_vehicle(api: &ApiClient, id: &str) -> Result<Option<TaxiVehicle>, ApiError> {
    let body = match api.get(&endpoints::taxi_vehicle_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create vehicle. The photo, when present, forces a multipart request.
pub async fn create_vehicle(
    api: &ApiClient,
    dto: &TaxiVehicleDto,
    photo: Option<FileField>,
) -> Result<Option<TaxiVehicle>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match photo {
        Some(file) => {
            api.send_multipart(
                Method::POST,
                endpoints::TAXI_VEHICLES,
                form_fields(dto)?,
                vec![("photo".to_string(), file)],
            )
            .await?
        }
        None => {
            api.send_json(Method::POST, endpoints::TAXI_VEHICLES, dto)
                .await?
        }
    };
    normalize_record(body)
}

/// Update vehicle
pub async fn update_vehicle(
    api: &ApiClient,
    id: &str,
    dto: &TaxiVehicleDto,
    photo: Option<FileField>,
) -> Result<Option<TaxiVehicle>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::taxi_vehicle_by_id(id);
    let body = match photo {
        Some(file) => {
            api.send_multipart(
                Method::PUT,
                &path,
                form_fields(dto)?,
                vec![("photo".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::PUT, &path, dto).await?,
    };
    normalize_record(body)
}

/// Delete vehicle
pub async fn delete_vehicle(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::taxi_vehicle_by_id(id)).await?;
    Ok(())
}

/// Attach a driver to the vehicle
pub async fn assign_vehicle_driver(
    api: &ApiClient,
    id: &str,
    driver_id: &str,
) -> Result<Option<TaxiVehicle>, ApiError> {
    let body = api
        .send_json(
            Method::POST,
            &endpoints::taxi_vehicle_assign_driver(id),
            &json!({ "driverId": driver_id }),
        )
        .await?;
    normalize_record(body)
}
