use serde::{Deserialize, Serialize};

/// Статусы поездки такси
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Requested,
    Assigned,
    EnRoute,
    Completed,
    Cancelled,
}

impl RideStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Assigned => "assigned",
            RideStatus::EnRoute => "en_route",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "requested" => Some(RideStatus::Requested),
            "assigned" => Some(RideStatus::Assigned),
            "en_route" => Some(RideStatus::EnRoute),
            "completed" => Some(RideStatus::Completed),
            "cancelled" => Some(RideStatus::Cancelled),
            _ => None,
        }
    }

    /// Поездка ещё активна (водителя можно переназначить)?
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            RideStatus::Requested | RideStatus::Assigned | RideStatus::EnRoute
        )
    }
}

impl ToString for RideStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
