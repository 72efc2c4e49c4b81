use serde::{Deserialize, Serialize};

// ============================================================================
// Запись
// ============================================================================

/// Товар каталога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    /// Артикул продавца
    pub sku: String,

    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    #[serde(rename = "oldPrice")]
    pub old_price: Option<f64>,

    #[serde(default)]
    pub stock: i32,

    /// Относительные пути изображений под `/uploads/`
    #[serde(default)]
    pub images: Vec<String>,

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
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    pub sku: String,
    #[serde(rename = "brandId")]
    pub brand_id: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    #[serde(rename = "oldPrice")]
    pub old_price: Option<f64>,
    pub stock: Option<i32>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название товара не может быть пустым".into());
        }
        if self.sku.trim().is_empty() {
            return Err("Артикул не может быть пустым".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        if let Some(stock) = self.stock {
            if stock < 0 {
                return Err("Остаток не может быть отрицательным".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_negative_price() {
        let dto = ProductDto {
            name: "Чайник".into(),
            sku: "KT-100".into(),
            price: -1.0,
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
