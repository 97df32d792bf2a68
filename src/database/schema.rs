//! Esquema de la base de datos
//!
//! Cuatro tablas relacionadas: `buses` y `routes` son dueñas de `schedules`,
//! y `schedules` es dueña de `reservations`. Todas las claves foráneas borran
//! en cascada.

use sqlx::SqlitePool;
use tracing::{debug, info};

const SCHEMA_STATEMENTS: [&str; 7] = [
    r#"
    CREATE TABLE IF NOT EXISTS buses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        bus_number VARCHAR(20) NOT NULL UNIQUE,
        model VARCHAR(50) NOT NULL,
        capacity INTEGER NOT NULL,
        year INTEGER NOT NULL,
        status VARCHAR(20) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS routes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        route_name VARCHAR(100) NOT NULL,
        origin VARCHAR(100) NOT NULL,
        destination VARCHAR(100) NOT NULL,
        distance REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS schedules (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        bus_id INTEGER NOT NULL REFERENCES buses(id) ON DELETE CASCADE,
        route_id INTEGER NOT NULL REFERENCES routes(id) ON DELETE CASCADE,
        departure_time DATETIME NOT NULL,
        arrival_time DATETIME NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        schedule_id INTEGER NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
        passenger_name VARCHAR(100) NOT NULL,
        seat_number INTEGER NOT NULL,
        reservation_date DATE NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_schedules_bus_id ON schedules(bus_id)",
    "CREATE INDEX IF NOT EXISTS idx_schedules_route_id ON schedules(route_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_schedule_id ON reservations(schedule_id)",
];

/// Crear las tablas si no existen. Nunca borra ni altera datos existentes.
pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in SCHEMA_STATEMENTS {
        debug!("Aplicando DDL: {}", statement.trim().lines().next().unwrap_or_default());
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("📐 Esquema verificado ({} sentencias)", SCHEMA_STATEMENTS.len());
    Ok(())
}
