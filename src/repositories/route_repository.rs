use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::models::{NewRoute, Route, RouteChanges};
use crate::repositories::record_exists;
use crate::utils::errors::{classify_write_error, not_found_error, AppResult};

pub struct RouteRepository {
    pool: SqlitePool,
}

impl RouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Route>> {
        let routes = sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(routes)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Route>> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    pub async fn create(&self, new_route: NewRoute) -> AppResult<Route> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO routes (route_name, origin, destination, distance)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new_route.route_name)
        .bind(&new_route.origin)
        .bind(&new_route.destination)
        .bind(new_route.distance)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, "Route"))?
        .last_insert_rowid();

        let route = fetch_route(&mut tx, id).await?;
        tx.commit().await?;

        Ok(route)
    }

    pub async fn update(&self, id: i64, changes: RouteChanges) -> AppResult<Route> {
        let mut tx = self.pool.begin().await?;

        if !record_exists(&mut tx, "routes", id).await? {
            return Err(not_found_error("Route", id));
        }

        sqlx::query(
            r#"
            UPDATE routes SET
                route_name = COALESCE(?2, route_name),
                origin = COALESCE(?3, origin),
                destination = COALESCE(?4, destination),
                distance = COALESCE(?5, distance)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(changes.route_name)
        .bind(changes.origin)
        .bind(changes.destination)
        .bind(changes.distance)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, "Route"))?;

        let route = fetch_route(&mut tx, id).await?;
        tx.commit().await?;

        Ok(route)
    }

    /// Elimina la ruta; sus horarios y las reservas de éstos caen en cascada
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let schedules: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedules WHERE route_id = ?1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM routes WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Route", id));
        }

        tx.commit().await?;

        info!("🗑️  Ruta {} eliminada (cascada: {} horarios)", id, schedules);
        Ok(())
    }
}

async fn fetch_route(conn: &mut SqliteConnection, id: i64) -> Result<Route, sqlx::Error> {
    sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = ?1")
        .bind(id)
        .fetch_one(conn)
        .await
}
