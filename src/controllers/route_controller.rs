use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

use crate::dto::route_dto::{CreateRouteRequest, RouteResponse, UpdateRouteRequest};
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<RouteResponse>, AppError> {
        let routes = self.repository.find_all().await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<RouteResponse, AppError> {
        let route = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", id))?;

        Ok(RouteResponse::from(route))
    }

    pub async fn create(&self, request: CreateRouteRequest) -> Result<RouteResponse, AppError> {
        request.validate()?;

        let route = self.repository.create(request.into()).await?;
        info!(
            "🛣️  Ruta creada: {} ({} → {})",
            route.route_name, route.origin, route.destination
        );

        Ok(RouteResponse::from(route))
    }

    pub async fn update(&self, id: i64, request: UpdateRouteRequest) -> Result<RouteResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", id))?;

        request.validate()?;

        let route = self.repository.update(id, request.into()).await?;
        info!("✏️  Ruta {} actualizada", route.id);

        Ok(RouteResponse::from(route))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
