use sqlx::SqlitePool;
use tracing::info;

use crate::dto::schedule_dto::{
    CreateScheduleRequest, ScheduleDetailResponse, ScheduleResponse, UpdateScheduleRequest,
};
use crate::models::{NewSchedule, ScheduleChanges};
use crate::repositories::schedule_repository::ScheduleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct ScheduleController {
    repository: ScheduleRepository,
}

impl ScheduleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ScheduleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ScheduleDetailResponse>, AppError> {
        let schedules = self.repository.find_all().await?;
        Ok(schedules.into_iter().map(ScheduleDetailResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ScheduleDetailResponse, AppError> {
        let schedule = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", id))?;

        Ok(ScheduleDetailResponse::from(schedule))
    }

    pub async fn create(&self, request: CreateScheduleRequest) -> Result<ScheduleResponse, AppError> {
        let new_schedule = NewSchedule::try_from(request)?;

        let schedule = self.repository.create(new_schedule).await?;
        info!(
            "🕒 Horario {} creado: bus {} en ruta {}",
            schedule.id, schedule.bus_id, schedule.route_id
        );

        Ok(ScheduleResponse::from(schedule))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateScheduleRequest,
    ) -> Result<ScheduleResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Schedule", id))?;

        let changes = ScheduleChanges::try_from(request)?;

        let schedule = self.repository.update(id, changes).await?;
        info!("✏️  Horario {} actualizado", schedule.id);

        Ok(ScheduleResponse::from(schedule))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
