use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::schedule_controller::ScheduleController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::schedule_dto::{
    CreateScheduleRequest, ScheduleDetailResponse, ScheduleResponse, UpdateScheduleRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{AppJson, AppPath};

pub fn create_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route("/:id", get(get_schedule).put(update_schedule).delete(delete_schedule))
}

async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleDetailResponse>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_schedule(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ScheduleDetailResponse>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_schedule(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_schedule(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<UpdateScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_schedule(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Schedule deleted successfully")))
}
