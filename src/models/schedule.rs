//! Modelo de Schedule
//!
//! Un horario asigna un autobús a una ruta con hora de salida y de llegada.
//! Las lecturas se hacen con JOIN para incluir el resumen del bus y de la ruta.

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Fila de la tabla `schedules`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Schedule {
    pub id: i64,
    pub bus_id: i64,
    pub route_id: i64,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

/// Horario con los datos del bus y la ruta obtenidos por JOIN
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ScheduleDetail {
    pub id: i64,
    pub bus_id: i64,
    pub route_id: i64,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub bus_number: String,
    pub route_name: String,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub bus_id: i64,
    pub route_id: i64,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleChanges {
    pub bus_id: Option<i64>,
    pub route_id: Option<i64>,
    pub departure_time: Option<NaiveDateTime>,
    pub arrival_time: Option<NaiveDateTime>,
}
