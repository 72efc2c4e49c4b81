use serde::{Deserialize, Serialize};

/// Автомобиль таксопарка
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxiVehicle {
    pub id: String,

    #[serde(rename = "plateNumber")]
    pub plate_number: String,

    pub make: String,

    pub model: String,

    #[serde(default)]
    pub seats: i32,

    pub photo: Option<String>,

    #[serde(rename = "driverId")]
    pub driver_id: Option<String>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxiVehicleDto {
    pub id: Option<String>,
    #[serde(rename = "plateNumber")]
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub seats: Option<i32>,
    #[serde(rename = "driverId")]
    pub driver_id: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl TaxiVehicleDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.plate_number.trim().is_empty() {
            return Err("Госномер не может быть пустым".into());
        }
        if self.make.trim().is_empty() || self.model.trim().is_empty() {
            return Err("Марка и модель обязательны".into());
        }
        Ok(())
    }
}
