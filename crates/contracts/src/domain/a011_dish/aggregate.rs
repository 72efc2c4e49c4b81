use serde::{Deserialize, Serialize};

/// Блюдо меню ресторана
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,

    #[serde(rename = "restaurantId")]
    pub restaurant_id: String,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    pub image: Option<String>,

    /// Доступно к заказу прямо сейчас (стоп-лист)
    #[serde(rename = "isAvailable", default)]
    pub is_available: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DishDto {
    pub id: Option<String>,
    #[serde(rename = "restaurantId")]
    pub restaurant_id: String,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(rename = "isAvailable")]
    pub is_available: Option<bool>,
}

impl DishDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.restaurant_id.trim().is_empty() {
            return Err("Блюдо должно принадлежать ресторану".into());
        }
        if self.name.trim().is_empty() {
            return Err("Название блюда не может быть пустым".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        Ok(())
    }
}
