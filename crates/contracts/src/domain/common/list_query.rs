use serde::{Deserialize, Serialize};

/// Параметры списковых запросов (фильтры, сортировка, пагинация).
///
/// Все поля опциональны: сервер применяет свои значения по умолчанию.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Поисковая строка (поиск по имени/коду на стороне сервера)
    pub search: Option<String>,
    /// Фильтр по статусу записи ("active", "cancelled" и т.п.)
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub sort_ascending: Option<bool>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort_by = Some(field.into());
        self.sort_ascending = Some(ascending);
        self
    }
}
