use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::models::{Bus, BusChanges, NewBus};
use crate::repositories::record_exists;
use crate::utils::errors::{classify_write_error, conflict_error, not_found_error, AppResult};

pub struct BusRepository {
    pool: SqlitePool,
}

impl BusRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Bus>> {
        let buses = sqlx::query_as::<_, Bus>("SELECT * FROM buses ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(buses)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Bus>> {
        let bus = sqlx::query_as::<_, Bus>("SELECT * FROM buses WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bus)
    }

    pub async fn create(&self, new_bus: NewBus) -> AppResult<Bus> {
        let mut tx = self.pool.begin().await?;

        if bus_number_taken(&mut tx, &new_bus.bus_number, None).await? {
            return Err(conflict_error("Bus", "busNumber", &new_bus.bus_number));
        }

        let id = sqlx::query(
            r#"
            INSERT INTO buses (bus_number, model, capacity, year, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new_bus.bus_number)
        .bind(&new_bus.model)
        .bind(new_bus.capacity)
        .bind(new_bus.year)
        .bind(&new_bus.status)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, "Bus"))?
        .last_insert_rowid();

        let bus = fetch_bus(&mut tx, id).await?;
        tx.commit().await?;

        debug!("Bus {} insertado con id {}", bus.bus_number, bus.id);
        Ok(bus)
    }

    pub async fn update(&self, id: i64, changes: BusChanges) -> AppResult<Bus> {
        let mut tx = self.pool.begin().await?;

        if !record_exists(&mut tx, "buses", id).await? {
            return Err(not_found_error("Bus", id));
        }

        if let Some(bus_number) = &changes.bus_number {
            if bus_number_taken(&mut tx, bus_number, Some(id)).await? {
                return Err(conflict_error("Bus", "busNumber", bus_number));
            }
        }

        sqlx::query(
            r#"
            UPDATE buses SET
                bus_number = COALESCE(?2, bus_number),
                model = COALESCE(?3, model),
                capacity = COALESCE(?4, capacity),
                year = COALESCE(?5, year),
                status = COALESCE(?6, status)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(changes.bus_number)
        .bind(changes.model)
        .bind(changes.capacity)
        .bind(changes.year)
        .bind(changes.status)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, "Bus"))?;

        let bus = fetch_bus(&mut tx, id).await?;
        tx.commit().await?;

        Ok(bus)
    }

    /// Elimina el bus; sus horarios y las reservas de éstos caen en cascada
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let (schedules, reservations): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM schedules WHERE bus_id = ?1),
                (SELECT COUNT(*) FROM reservations r
                    JOIN schedules s ON s.id = r.schedule_id
                    WHERE s.bus_id = ?1)
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM buses WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Bus", id));
        }

        tx.commit().await?;

        info!(
            "🗑️  Bus {} eliminado (cascada: {} horarios, {} reservas)",
            id, schedules, reservations
        );
        Ok(())
    }
}

async fn fetch_bus(conn: &mut SqliteConnection, id: i64) -> Result<Bus, sqlx::Error> {
    sqlx::query_as::<_, Bus>("SELECT * FROM buses WHERE id = ?1")
        .bind(id)
        .fetch_one(conn)
        .await
}

async fn bus_number_taken(
    conn: &mut SqliteConnection,
    bus_number: &str,
    exclude_id: Option<i64>,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM buses WHERE bus_number = ?1 AND (?2 IS NULL OR id <> ?2)",
    )
    .bind(bus_number)
    .bind(exclude_id)
    .fetch_one(conn)
    .await?;

    Ok(count > 0)
}
