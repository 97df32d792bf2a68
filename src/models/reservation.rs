//! Modelo de Reservation
//!
//! Una reserva de asiento contra un horario. No admite actualización.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::FromRow;

/// Fila de la tabla `reservations`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Reservation {
    pub id: i64,
    pub schedule_id: i64,
    pub passenger_name: String,
    pub seat_number: i32,
    pub reservation_date: NaiveDate,
}

/// Reserva con el horario, bus y ruta obtenidos por JOIN
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ReservationDetail {
    pub id: i64,
    pub schedule_id: i64,
    pub passenger_name: String,
    pub seat_number: i32,
    pub reservation_date: NaiveDate,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub bus_id: i64,
    pub bus_number: String,
    pub route_id: i64,
    pub route_name: String,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub schedule_id: i64,
    pub passenger_name: String,
    pub seat_number: i32,
    pub reservation_date: NaiveDate,
}
