use serde::{Deserialize, Serialize};

/// Право доступа, привязанное к ролям
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    /// Машинный ключ ("orders.cancel", "products.write")
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    /// Роли, которым выдано право
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PermissionDto {
    pub id: Option<String>,
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub roles: Vec<String>,
}

impl PermissionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("Ключ права не может быть пустым".into());
        }
        if self.name.trim().is_empty() {
            return Err("Название права не может быть пустым".into());
        }
        Ok(())
    }
}
