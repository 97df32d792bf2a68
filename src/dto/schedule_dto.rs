use serde::{Deserialize, Serialize};

use crate::dto::bus_dto::BusSummary;
use crate::dto::route_dto::RouteSummary;
use crate::models::{NewSchedule, Schedule, ScheduleChanges, ScheduleDetail};
use crate::utils::errors::AppError;
use crate::utils::validation::{format_datetime, parse_datetime_field};

// Request para crear un horario; las horas llegan como texto ISO 8601
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub bus_id: i64,
    pub route_id: i64,
    pub departure_time: String,
    pub arrival_time: String,
}

// Request para actualizar un horario
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    pub bus_id: Option<i64>,
    pub route_id: Option<i64>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

// Response plana, usada al crear y actualizar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: i64,
    pub bus_id: i64,
    pub route_id: i64,
    pub departure_time: String,
    pub arrival_time: String,
}

// Response de lectura con el bus y la ruta embebidos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetailResponse {
    pub id: i64,
    pub bus_id: i64,
    pub route_id: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub bus: BusSummary,
    pub route: RouteSummary,
}

// Resumen embebido en reservas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub id: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub bus: BusSummary,
    pub route: RouteSummary,
}

impl TryFrom<CreateScheduleRequest> for NewSchedule {
    type Error = AppError;

    fn try_from(request: CreateScheduleRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            bus_id: request.bus_id,
            route_id: request.route_id,
            departure_time: parse_datetime_field("departureTime", &request.departure_time)?,
            arrival_time: parse_datetime_field("arrivalTime", &request.arrival_time)?,
        })
    }
}

impl TryFrom<UpdateScheduleRequest> for ScheduleChanges {
    type Error = AppError;

    fn try_from(request: UpdateScheduleRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            bus_id: request.bus_id,
            route_id: request.route_id,
            departure_time: request
                .departure_time
                .map(|value| parse_datetime_field("departureTime", &value))
                .transpose()?,
            arrival_time: request
                .arrival_time
                .map(|value| parse_datetime_field("arrivalTime", &value))
                .transpose()?,
        })
    }
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: schedule.id,
            bus_id: schedule.bus_id,
            route_id: schedule.route_id,
            departure_time: format_datetime(&schedule.departure_time),
            arrival_time: format_datetime(&schedule.arrival_time),
        }
    }
}

impl From<ScheduleDetail> for ScheduleDetailResponse {
    fn from(detail: ScheduleDetail) -> Self {
        Self {
            id: detail.id,
            bus_id: detail.bus_id,
            route_id: detail.route_id,
            departure_time: format_datetime(&detail.departure_time),
            arrival_time: format_datetime(&detail.arrival_time),
            bus: BusSummary {
                id: detail.bus_id,
                bus_number: detail.bus_number,
            },
            route: RouteSummary {
                id: detail.route_id,
                route_name: detail.route_name,
                origin: detail.origin,
                destination: detail.destination,
            },
        }
    }
}
