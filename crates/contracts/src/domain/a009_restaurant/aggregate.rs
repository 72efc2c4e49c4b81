use serde::{Deserialize, Serialize};

/// Ресторан
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub phone: String,

    /// Кухня ("italian", "georgian", ...)
    #[serde(default)]
    pub cuisine: String,

    pub logo: Option<String>,

    /// Обложка карточки ресторана
    pub cover: Option<String>,

    #[serde(rename = "openingHours", default)]
    pub opening_hours: String,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RestaurantDto {
    pub id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub cuisine: Option<String>,
    #[serde(rename = "openingHours")]
    pub opening_hours: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl RestaurantDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название ресторана не может быть пустым".into());
        }
        Ok(())
    }
}
