//! Serializable views of platform state for export and inspection.

use serde::Serialize;

use crate::lifecycle::ConfirmedRide;
use crate::telemetry::TelemetryCounts;

/// Snapshot of one driver: offered destinations and riders awaiting a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverSnapshot {
    pub username: String,
    pub offers: Vec<String>,
    pub pending_riders: Vec<String>,
}

/// Snapshot of one rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiderSnapshot {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_ride: Option<ConfirmedRide>,
}

/// Whole-platform snapshot, accounts in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSnapshot {
    pub drivers: Vec<DriverSnapshot>,
    pub riders: Vec<RiderSnapshot>,
    pub counts: TelemetryCounts,
}
