use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

// ============================================================================
// Запись
// ============================================================================

/// Заказ (porter/grocery). Читается админкой, создаётся покупателем,
/// поэтому DTO на запись здесь только для смены статуса.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,

    #[serde(rename = "orderNumber")]
    pub order_number: String,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    #[serde(rename = "customerPhone", default)]
    pub customer_phone: String,

    #[serde(rename = "deliveryAddress", default)]
    pub delivery_address: String,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    pub total: f64,

    #[serde(rename = "paymentMethod", default)]
    pub payment_method: String,

    pub status: OrderStatus,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusDto {
    pub status: OrderStatus,
    /// Комментарий оператора (причина отмены и т.п.)
    pub comment: Option<String>,
}
