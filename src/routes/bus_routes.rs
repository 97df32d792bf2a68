use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::bus_controller::BusController;
use crate::dto::bus_dto::{BusResponse, CreateBusRequest, UpdateBusRequest};
use crate::dto::common_dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{AppJson, AppPath};

pub fn create_bus_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_buses).post(create_bus))
        .route("/:id", get(get_bus).put(update_bus).delete(delete_bus))
}

async fn list_buses(State(state): State<AppState>) -> Result<Json<Vec<BusResponse>>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_bus(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<BusResponse>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_bus(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBusRequest>,
) -> Result<(StatusCode, Json<BusResponse>), AppError> {
    let controller = BusController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_bus(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<UpdateBusRequest>,
) -> Result<Json<BusResponse>, AppError> {
    let controller = BusController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_bus(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = BusController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Bus deleted successfully")))
}
