use serde::{Deserialize, Serialize};

use crate::enums::RideStatus;

/// Поездка такси. Создаётся мобильным приложением; админка
/// просматривает, отменяет и переназначает водителя/машину.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxiRide {
    pub id: String,

    #[serde(rename = "riderName", default)]
    pub rider_name: String,

    #[serde(rename = "riderPhone", default)]
    pub rider_phone: String,

    #[serde(rename = "pickupAddress")]
    pub pickup_address: String,

    #[serde(rename = "dropoffAddress")]
    pub dropoff_address: String,

    #[serde(rename = "driverId")]
    pub driver_id: Option<String>,

    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,

    pub fare: Option<f64>,

    pub status: RideStatus,

    #[serde(rename = "requestedAt")]
    pub requested_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "completedAt")]
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Назначение водителя (и, опционально, конкретной машины) на поездку
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideAssignmentDto {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
}
