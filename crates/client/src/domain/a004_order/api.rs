use contracts::domain::a004_order::aggregate::{Order, OrderStatusDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;
use serde_json::json;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::ApiClient;

/// Fetch orders
pub async fn fetch_orders(api: &ApiClient, query: &ListQuery) -> Result<Vec<Order>, ApiError> {
    let path = format!("{}{}", endpoints::ORDERS, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single order
pub async fn fetch_order(api: &ApiClient, id: &str) -> Result<Option<Order>, ApiError> {
    let body = match api.get(&endpoints::order_by_id(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Move an order to a new status
pub async fn update_order_status(
    api: &ApiClient,
    id: &str,
    dto: &OrderStatusDto,
) -> Result<Option<Order>, ApiError> {
    let body = api
        .send_json(Method::PUT, &endpoints::order_status(id), dto)
        .await?;
    normalize_record(body)
}

/// Cancel an order
pub async fn cancel_order(api: &ApiClient, id: &str) -> Result<Option<Order>, ApiError> {
    let body = api.post(&endpoints::order_cancel(id)).await?;
    normalize_record(body)
}

/// Delete several orders in one call
pub async fn bulk_delete_orders(api: &ApiClient, ids: &[String]) -> Result<(), ApiError> {
    api.send_json(
        Method::POST,
        endpoints::ORDERS_BULK_DELETE,
        &json!({ "ids": ids }),
    )
    .await?;
    Ok(())
}
