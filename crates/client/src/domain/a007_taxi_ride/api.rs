use contracts::domain::a007_taxi_ride::aggregate::{RideAssignmentDto, TaxiRide};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::ApiClient;

/// Fetch rides
pub async fn fetch_rides(api: &ApiClient, query: &ListQuery) -> Result<Vec<TaxiRide>, ApiError> {
    let path = format!("{}{}", endpoints::TAXI_RIDES, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single ride
pub async fn fetch_ride(api: &ApiClient, id: &str) -> Result<Option<TaxiRide>, ApiError> {
    let body = match api.get(&endpoints::taxi_ride_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Cancel a ride
pub async fn cancel_ride(api: &ApiClient, id: &str) -> Result<Option<TaxiRide>, ApiError> {
    let body = api.post(&endpoints::taxi_ride_cancel(id)).await?;
    normalize_record(body)
}

/// Put a driver (and optionally a specific vehicle) on the ride
pub async fn assign_ride(
    api: &ApiClient,
    id: &str,
    dto: &RideAssignmentDto,
) -> Result<Option<TaxiRide>, ApiError> {
    let body = api
        .send_json(Method::POST, &endpoints::taxi_ride_assign(id), dto)
        .await?;
    normalize_record(body)
}
