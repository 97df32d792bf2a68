use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Bus, BusChanges, NewBus};

// Request para crear un autobús; todos los campos son obligatorios
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusRequest {
    #[validate(length(max = 20))]
    pub bus_number: String,

    #[validate(length(max = 50))]
    pub model: String,

    pub capacity: i32,
    pub year: i32,

    #[validate(length(max = 20))]
    pub status: String,
}

// Request para actualizar un autobús; los campos omitidos no cambian
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusRequest {
    #[validate(length(max = 20))]
    pub bus_number: Option<String>,

    #[validate(length(max = 50))]
    pub model: Option<String>,

    pub capacity: Option<i32>,
    pub year: Option<i32>,

    #[validate(length(max = 20))]
    pub status: Option<String>,
}

// Response de autobús
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusResponse {
    pub id: i64,
    pub bus_number: String,
    pub model: String,
    pub capacity: i32,
    pub year: i32,
    pub status: String,
}

// Resumen embebido en horarios y reservas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusSummary {
    pub id: i64,
    pub bus_number: String,
}

impl From<CreateBusRequest> for NewBus {
    fn from(request: CreateBusRequest) -> Self {
        Self {
            bus_number: request.bus_number,
            model: request.model,
            capacity: request.capacity,
            year: request.year,
            status: request.status,
        }
    }
}

impl From<UpdateBusRequest> for BusChanges {
    fn from(request: UpdateBusRequest) -> Self {
        Self {
            bus_number: request.bus_number,
            model: request.model,
            capacity: request.capacity,
            year: request.year,
            status: request.status,
        }
    }
}

impl From<Bus> for BusResponse {
    fn from(bus: Bus) -> Self {
        Self {
            id: bus.id,
            bus_number: bus.bus_number,
            model: bus.model,
            capacity: bus.capacity,
            year: bus.year,
            status: bus.status,
        }
    }
}
