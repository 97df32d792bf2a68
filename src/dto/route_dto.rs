use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewRoute, Route, RouteChanges};

// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    #[validate(length(max = 100))]
    pub route_name: String,

    #[validate(length(max = 100))]
    pub origin: String,

    #[validate(length(max = 100))]
    pub destination: String,

    pub distance: f64,
}

// Request para actualizar una ruta
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteRequest {
    #[validate(length(max = 100))]
    pub route_name: Option<String>,

    #[validate(length(max = 100))]
    pub origin: Option<String>,

    #[validate(length(max = 100))]
    pub destination: Option<String>,

    pub distance: Option<f64>,
}

// Response de ruta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub id: i64,
    pub route_name: String,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
}

// Resumen embebido en horarios y reservas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub id: i64,
    pub route_name: String,
    pub origin: String,
    pub destination: String,
}

impl From<CreateRouteRequest> for NewRoute {
    fn from(request: CreateRouteRequest) -> Self {
        Self {
            route_name: request.route_name,
            origin: request.origin,
            destination: request.destination,
            distance: request.distance,
        }
    }
}

impl From<UpdateRouteRequest> for RouteChanges {
    fn from(request: UpdateRouteRequest) -> Self {
        Self {
            route_name: request.route_name,
            origin: request.origin,
            destination: request.destination,
            distance: request.distance,
        }
    }
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            route_name: route.route_name,
            origin: route.origin,
            destination: route.destination,
            distance: route.distance,
        }
    }
}
