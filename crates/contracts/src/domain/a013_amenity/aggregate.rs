use serde::{Deserialize, Serialize};

/// Удобство номера ("Wi-Fi", "Кондиционер")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,

    pub name: String,

    /// Иконка (путь под `/uploads/`)
    pub icon: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AmenityDto {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

impl AmenityDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название удобства не может быть пустым".into());
        }
        Ok(())
    }
}
