use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

use crate::dto::reservation_dto::{
    CreateReservationRequest, ReservationDetailResponse, ReservationResponse,
};
use crate::models::NewReservation;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct ReservationController {
    repository: ReservationRepository,
}

impl ReservationController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ReservationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<ReservationDetailResponse>, AppError> {
        let reservations = self.repository.find_all().await?;
        Ok(reservations
            .into_iter()
            .map(ReservationDetailResponse::from)
            .collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ReservationDetailResponse, AppError> {
        let reservation = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reservation", id))?;

        Ok(ReservationDetailResponse::from(reservation))
    }

    pub async fn create(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ReservationResponse, AppError> {
        request.validate()?;
        let new_reservation = NewReservation::try_from(request)?;

        let reservation = self.repository.create(new_reservation).await?;
        info!(
            "🎫 Reserva {} creada: asiento {} en horario {}",
            reservation.id, reservation.seat_number, reservation.schedule_id
        );

        Ok(ReservationResponse::from(reservation))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
