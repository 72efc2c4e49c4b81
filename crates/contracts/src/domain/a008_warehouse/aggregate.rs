use serde::{Deserialize, Serialize};

/// Склад
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,

    pub name: String,

    /// Короткий код склада ("MSK-01")
    pub code: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub city: String,

    /// Вместимость, условных паллетомест
    #[serde(default)]
    pub capacity: i32,

    #[serde(rename = "managerId")]
    pub manager_id: Option<String>,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "createdAt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WarehouseDto {
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<i32>,
    #[serde(rename = "managerId")]
    pub manager_id: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl WarehouseDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название склада не может быть пустым".into());
        }
        if self.code.trim().is_empty() {
            return Err("Код склада не может быть пустым".into());
        }
        if self.code.len() > 20 {
            return Err("Код склада не должен превышать 20 символов".into());
        }
        Ok(())
    }
}
