use serde::{Deserialize, Serialize};

// ============================================================================
// Запись
// ============================================================================

/// Бренд товара. `logo` хранится как относительный путь под `/uploads/`,
/// абсолютный URL собирается на клиенте.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub logo: Option<String>,

    /// Бренд по умолчанию для новых товаров (единственный на тенанта)
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrandDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "isDefault")]
    pub is_default: Option<bool>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl BrandDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название бренда не может быть пустым".into());
        }
        if self.name.len() > 120 {
            return Err("Название бренда не должно превышать 120 символов".into());
        }
        Ok(())
    }
}
