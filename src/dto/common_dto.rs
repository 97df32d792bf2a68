use serde::{Deserialize, Serialize};

use crate::models::TableCounts;

// Confirmación simple devuelta por los DELETE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Conteos para el dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub buses: i64,
    pub routes: i64,
    pub schedules: i64,
    pub reservations: i64,
}

impl From<TableCounts> for DashboardStatsResponse {
    fn from(counts: TableCounts) -> Self {
        Self {
            buses: counts.buses,
            routes: counts.routes,
            schedules: counts.schedules,
            reservations: counts.reservations,
        }
    }
}
