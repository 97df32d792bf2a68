use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::bus_dto::BusSummary;
use crate::dto::route_dto::RouteSummary;
use crate::dto::schedule_dto::ScheduleSummary;
use crate::models::{NewReservation, Reservation, ReservationDetail};
use crate::utils::errors::AppError;
use crate::utils::validation::{format_date, format_datetime, parse_date_field};

// Request para crear una reserva (no existe request de actualización)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub schedule_id: i64,

    #[validate(length(max = 100))]
    pub passenger_name: String,

    pub seat_number: i32,
    pub reservation_date: String,
}

// Response plana, usada al crear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: i64,
    pub schedule_id: i64,
    pub passenger_name: String,
    pub seat_number: i32,
    pub reservation_date: String,
}

// Response de lectura con el horario, bus y ruta embebidos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetailResponse {
    pub id: i64,
    pub schedule_id: i64,
    pub passenger_name: String,
    pub seat_number: i32,
    pub reservation_date: String,
    pub schedule: ScheduleSummary,
}

impl TryFrom<CreateReservationRequest> for NewReservation {
    type Error = AppError;

    fn try_from(request: CreateReservationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            schedule_id: request.schedule_id,
            passenger_name: request.passenger_name,
            seat_number: request.seat_number,
            reservation_date: parse_date_field("reservationDate", &request.reservation_date)?,
        })
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            schedule_id: reservation.schedule_id,
            passenger_name: reservation.passenger_name,
            seat_number: reservation.seat_number,
            reservation_date: format_date(&reservation.reservation_date),
        }
    }
}

impl From<ReservationDetail> for ReservationDetailResponse {
    fn from(detail: ReservationDetail) -> Self {
        Self {
            id: detail.id,
            schedule_id: detail.schedule_id,
            passenger_name: detail.passenger_name,
            seat_number: detail.seat_number,
            reservation_date: format_date(&detail.reservation_date),
            schedule: ScheduleSummary {
                id: detail.schedule_id,
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
            },
        }
    }
}
