//! Repositorios de acceso a datos
//!
//! Cada repositorio recibe el pool explícitamente al construirse y ejecuta
//! cada operación de escritura dentro de una transacción.

pub mod bus_repository;
pub mod reservation_repository;
pub mod route_repository;
pub mod schedule_repository;
pub mod stats_repository;

use sqlx::SqliteConnection;

/// Verificar si existe una fila con el id dado en la tabla indicada
pub(crate) async fn record_exists(
    conn: &mut SqliteConnection,
    table: &'static str,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {} WHERE id = ?1", table);
    let count: i64 = sqlx::query_scalar(&query).bind(id).fetch_one(conn).await?;
    Ok(count > 0)
}
