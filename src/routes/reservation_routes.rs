use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::reservation_dto::{
    CreateReservationRequest, ReservationDetailResponse, ReservationResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{AppJson, AppPath};

// Sin PUT: las reservas sólo se crean y se eliminan
pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations).post(create_reservation))
        .route("/:id", get(get_reservation).delete(delete_reservation))
}

async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationDetailResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_reservation(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ReservationDetailResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_reservation(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn delete_reservation(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Reservation deleted successfully")))
}
