use sqlx::SqlitePool;

use crate::dto::common_dto::DashboardStatsResponse;
use crate::repositories::stats_repository::StatsRepository;
use crate::utils::errors::AppError;

pub struct DashboardController {
    repository: StatsRepository,
}

impl DashboardController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: StatsRepository::new(pool),
        }
    }

    pub async fn stats(&self) -> Result<DashboardStatsResponse, AppError> {
        let counts = self.repository.count_all().await?;
        Ok(DashboardStatsResponse::from(counts))
    }
}
