use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::models::{NewSchedule, Schedule, ScheduleChanges, ScheduleDetail};
use crate::repositories::record_exists;
use crate::utils::errors::{classify_write_error, not_found_error, reference_error, AppResult};

// El resumen de bus y ruta se recalcula en cada lectura; no se almacena
const SCHEDULE_DETAIL_SELECT: &str = r#"
    SELECT
        s.id, s.bus_id, s.route_id, s.departure_time, s.arrival_time,
        b.bus_number,
        r.route_name, r.origin, r.destination
    FROM schedules s
    JOIN buses b ON b.id = s.bus_id
    JOIN routes r ON r.id = s.route_id
"#;

pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<ScheduleDetail>> {
        let query = format!("{} ORDER BY s.id", SCHEDULE_DETAIL_SELECT);
        let schedules = sqlx::query_as::<_, ScheduleDetail>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(schedules)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ScheduleDetail>> {
        let query = format!("{} WHERE s.id = ?1", SCHEDULE_DETAIL_SELECT);
        let schedule = sqlx::query_as::<_, ScheduleDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(schedule)
    }

    pub async fn create(&self, new_schedule: NewSchedule) -> AppResult<Schedule> {
        let mut tx = self.pool.begin().await?;

        ensure_references(&mut tx, Some(new_schedule.bus_id), Some(new_schedule.route_id)).await?;

        let id = sqlx::query(
            r#"
            INSERT INTO schedules (bus_id, route_id, departure_time, arrival_time)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(new_schedule.bus_id)
        .bind(new_schedule.route_id)
        .bind(new_schedule.departure_time)
        .bind(new_schedule.arrival_time)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, "Schedule"))?
        .last_insert_rowid();

        let schedule = fetch_schedule(&mut tx, id).await?;
        tx.commit().await?;

        Ok(schedule)
    }

    pub async fn update(&self, id: i64, changes: ScheduleChanges) -> AppResult<Schedule> {
        let mut tx = self.pool.begin().await?;

        if !record_exists(&mut tx, "schedules", id).await? {
            return Err(not_found_error("Schedule", id));
        }

        ensure_references(&mut tx, changes.bus_id, changes.route_id).await?;

        sqlx::query(
            r#"
            UPDATE schedules SET
                bus_id = COALESCE(?2, bus_id),
                route_id = COALESCE(?3, route_id),
                departure_time = COALESCE(?4, departure_time),
                arrival_time = COALESCE(?5, arrival_time)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(changes.bus_id)
        .bind(changes.route_id)
        .bind(changes.departure_time)
        .bind(changes.arrival_time)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, "Schedule"))?;

        let schedule = fetch_schedule(&mut tx, id).await?;
        tx.commit().await?;

        Ok(schedule)
    }

    /// Elimina el horario junto con sus reservas
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Schedule", id));
        }

        info!("🗑️  Horario {} eliminado", id);
        Ok(())
    }
}

async fn ensure_references(
    conn: &mut SqliteConnection,
    bus_id: Option<i64>,
    route_id: Option<i64>,
) -> AppResult<()> {
    if let Some(bus_id) = bus_id {
        if !record_exists(&mut *conn, "buses", bus_id).await? {
            return Err(reference_error("busId", bus_id));
        }
    }

    if let Some(route_id) = route_id {
        if !record_exists(&mut *conn, "routes", route_id).await? {
            return Err(reference_error("routeId", route_id));
        }
    }

    Ok(())
}

async fn fetch_schedule(conn: &mut SqliteConnection, id: i64) -> Result<Schedule, sqlx::Error> {
    sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE id = ?1")
        .bind(id)
        .fetch_one(conn)
        .await
}
