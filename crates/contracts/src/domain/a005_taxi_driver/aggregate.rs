use serde::{Deserialize, Serialize};

/// Водитель такси
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxiDriver {
    pub id: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub phone: String,

    pub email: Option<String>,

    #[serde(rename = "licenceNumber")]
    pub licence_number: String,

    /// Скан водительского удостоверения (путь под `/uploads/`)
    #[serde(rename = "licenceScan")]
    pub licence_scan: Option<String>,

    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxiDriverDto {
    pub id: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(rename = "licenceNumber")]
    pub licence_number: String,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl TaxiDriverDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("ФИО водителя не может быть пустым".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Телефон не может быть пустым".into());
        }
        if self.licence_number.trim().is_empty() {
            return Err("Номер удостоверения не может быть пустым".into());
        }
        Ok(())
    }
}
