//! Modelo de Route
//!
//! Mapea exactamente a la tabla `routes`.

use sqlx::FromRow;

/// Ruta entre un origen y un destino
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Route {
    pub id: i64,
    pub route_name: String,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
}

#[derive(Debug, Clone)]
pub struct NewRoute {
    pub route_name: String,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RouteChanges {
    pub route_name: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub distance: Option<f64>,
}
