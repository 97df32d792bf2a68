use sqlx::SqlitePool;
use tracing::info;

use crate::models::{NewReservation, Reservation, ReservationDetail};
use crate::repositories::record_exists;
use crate::utils::errors::{classify_write_error, not_found_error, reference_error, AppResult};

const RESERVATION_DETAIL_SELECT: &str = r#"
    SELECT
        res.id, res.schedule_id, res.passenger_name, res.seat_number, res.reservation_date,
        s.departure_time, s.arrival_time,
        b.id AS bus_id, b.bus_number,
        r.id AS route_id, r.route_name, r.origin, r.destination
    FROM reservations res
    JOIN schedules s ON s.id = res.schedule_id
    JOIN buses b ON b.id = s.bus_id
    JOIN routes r ON r.id = s.route_id
"#;

pub struct ReservationRepository {
    pool: SqlitePool,
}

impl ReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<ReservationDetail>> {
        let query = format!("{} ORDER BY res.id", RESERVATION_DETAIL_SELECT);
        let reservations = sqlx::query_as::<_, ReservationDetail>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservations)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ReservationDetail>> {
        let query = format!("{} WHERE res.id = ?1", RESERVATION_DETAIL_SELECT);
        let reservation = sqlx::query_as::<_, ReservationDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(reservation)
    }

    /// Crea la reserva. No se verifica si el asiento ya está ocupado en el horario.
    pub async fn create(&self, new_reservation: NewReservation) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await?;

        if !record_exists(&mut tx, "schedules", new_reservation.schedule_id).await? {
            return Err(reference_error("scheduleId", new_reservation.schedule_id));
        }

        let id = sqlx::query(
            r#"
            INSERT INTO reservations (schedule_id, passenger_name, seat_number, reservation_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(new_reservation.schedule_id)
        .bind(&new_reservation.passenger_name)
        .bind(new_reservation.seat_number)
        .bind(new_reservation.reservation_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, "Reservation"))?
        .last_insert_rowid();

        let reservation = sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(reservation)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Reservation", id));
        }

        info!("🗑️  Reserva {} eliminada", id);
        Ok(())
    }
}
