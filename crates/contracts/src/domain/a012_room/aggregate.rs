use serde::{Deserialize, Serialize};

/// Номер отеля
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,

    #[serde(rename = "hotelId")]
    pub hotel_id: String,

    /// Номер на этаже ("204", "Люкс-3")
    pub number: String,

    /// Тип номера ("standard", "suite", "family")
    #[serde(rename = "roomType", default)]
    pub room_type: String,

    #[serde(rename = "pricePerNight")]
    pub price_per_night: f64,

    /// Максимум гостей
    #[serde(default)]
    pub capacity: i32,

    #[serde(default)]
    pub images: Vec<String>,

    /// Ссылки на удобства (a013)
    #[serde(rename = "amenityIds", default)]
    pub amenity_ids: Vec<String>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDto {
    pub id: Option<String>,
    #[serde(rename = "hotelId")]
    pub hotel_id: String,
    pub number: String,
    #[serde(rename = "roomType")]
    pub room_type: Option<String>,
    #[serde(rename = "pricePerNight")]
    pub price_per_night: f64,
    pub capacity: Option<i32>,
    #[serde(rename = "amenityIds")]
    pub amenity_ids: Option<Vec<String>>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl RoomDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.hotel_id.trim().is_empty() {
            return Err("Номер должен принадлежать отелю".into());
        }
        if self.number.trim().is_empty() {
            return Err("Номер комнаты не может быть пустым".into());
        }
        if self.price_per_night < 0.0 {
            return Err("Цена за ночь не может быть отрицательной".into());
        }
        Ok(())
    }
}
