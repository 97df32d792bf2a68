//! Rutas HTTP
//!
//! Un router por entidad, anidados bajo su recurso.

pub mod bus_routes;
pub mod dashboard_routes;
pub mod reservation_routes;
pub mod route_routes;
pub mod schedule_routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_for_origins;
use crate::state::AppState;

/// Construir el router completo de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_for_origins(&state.config.cors_origins);

    Router::new()
        .route("/health", get(dashboard_routes::health_check))
        .nest("/buses", bus_routes::create_bus_router())
        .nest("/routes", route_routes::create_route_router())
        .nest("/schedules", schedule_routes::create_schedule_router())
        .nest("/reservations", reservation_routes::create_reservation_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
