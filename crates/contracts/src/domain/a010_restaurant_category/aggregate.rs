use serde::{Deserialize, Serialize};

/// Категория меню ресторана ("Супы", "Десерты")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCategory {
    pub id: String,

    #[serde(rename = "restaurantId")]
    pub restaurant_id: String,

    pub name: String,

    pub image: Option<String>,

    /// Позиция в меню (сортировка на витрине)
    #[serde(default)]
    pub position: i32,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RestaurantCategoryDto {
    pub id: Option<String>,
    #[serde(rename = "restaurantId")]
    pub restaurant_id: String,
    pub name: String,
    pub position: Option<i32>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl RestaurantCategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.restaurant_id.trim().is_empty() {
            return Err("Категория должна принадлежать ресторану".into());
        }
        if self.name.trim().is_empty() {
            return Err("Название категории не может быть пустым".into());
        }
        Ok(())
    }
}
