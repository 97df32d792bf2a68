//! Conteos agregados para el dashboard

use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TableCounts {
    pub buses: i64,
    pub routes: i64,
    pub schedules: i64,
    pub reservations: i64,
}
