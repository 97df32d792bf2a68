use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

use crate::dto::bus_dto::{BusResponse, CreateBusRequest, UpdateBusRequest};
use crate::repositories::bus_repository::BusRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct BusController {
    repository: BusRepository,
}

impl BusController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: BusRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<BusResponse>, AppError> {
        let buses = self.repository.find_all().await?;
        Ok(buses.into_iter().map(BusResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<BusResponse, AppError> {
        let bus = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Bus", id))?;

        Ok(BusResponse::from(bus))
    }

    pub async fn create(&self, request: CreateBusRequest) -> Result<BusResponse, AppError> {
        request.validate()?;

        let bus = self.repository.create(request.into()).await?;
        info!("🚌 Autobús creado: {} (id {})", bus.bus_number, bus.id);

        Ok(BusResponse::from(bus))
    }

    pub async fn update(&self, id: i64, request: UpdateBusRequest) -> Result<BusResponse, AppError> {
        // Un id inexistente es 404 aunque el payload tampoco sea válido
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Bus", id))?;

        request.validate()?;

        let bus = self.repository.update(id, request.into()).await?;
        info!("✏️  Autobús {} actualizado", bus.id);

        Ok(BusResponse::from(bus))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
