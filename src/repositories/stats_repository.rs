use sqlx::SqlitePool;

use crate::models::TableCounts;
use crate::utils::errors::AppResult;

pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Conteo de filas de las cuatro tablas en una sola lectura
    pub async fn count_all(&self) -> AppResult<TableCounts> {
        let counts = sqlx::query_as::<_, TableCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM buses) AS buses,
                (SELECT COUNT(*) FROM routes) AS routes,
                (SELECT COUNT(*) FROM schedules) AS schedules,
                (SELECT COUNT(*) FROM reservations) AS reservations
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }
}
