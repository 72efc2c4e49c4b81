use serde::{Deserialize, Serialize};

/// Продуктовая позиция (grocery-витрина)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grocery {
    pub id: String,

    pub name: String,

    /// Категория витрины ("dairy", "bakery" и т.п.)
    #[serde(default)]
    pub category: String,

    pub price: f64,

    /// Единица измерения ("kg", "pcs", "l")
    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub stock: i32,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GroceryDto {
    pub id: Option<String>,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub unit: Option<String>,
    pub stock: Option<i32>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl GroceryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название позиции не может быть пустым".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        Ok(())
    }
}
