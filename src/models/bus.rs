//! Modelo de Bus
//!
//! Mapea exactamente a la tabla `buses`.

use sqlx::FromRow;

/// Autobús de la flota
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Bus {
    pub id: i64,
    pub bus_number: String,
    pub model: String,
    pub capacity: i32,
    pub year: i32,
    pub status: String,
}

/// Campos para insertar un autobús
#[derive(Debug, Clone)]
pub struct NewBus {
    pub bus_number: String,
    pub model: String,
    pub capacity: i32,
    pub year: i32,
    pub status: String,
}

/// Cambios parciales; `None` conserva el valor actual
#[derive(Debug, Clone, Default)]
pub struct BusChanges {
    pub bus_number: Option<String>,
    pub model: Option<String>,
    pub capacity: Option<i32>,
    pub year: Option<i32>,
    pub status: Option<String>,
}
