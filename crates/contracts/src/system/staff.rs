use serde::{Deserialize, Serialize};

/// Сотрудник (кладовщик, курьер, оператор)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub role: String,
    /// Склад, к которому прикреплён сотрудник
    pub warehouse_id: Option<String>,
    /// Скан документа, путь под `/uploads/`
    pub id_document: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaffDto {
    pub id: Option<String>,
    pub full_name: String,
    pub phone: String,
    pub role: String,
    pub warehouse_id: Option<String>,
    pub is_active: Option<bool>,
}

impl StaffDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("ФИО сотрудника не может быть пустым".into());
        }
        if self.role.trim().is_empty() {
            return Err("Роль сотрудника не может быть пустой".into());
        }
        Ok(())
    }
}
