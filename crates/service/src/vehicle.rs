//! Vehicle service
//!
//! CRUD over the vehicle store, plus price and address enrichment on
//! single-record reads.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use vehicles_storage::{Storage, VehicleStorage};
use vehicles_types::{Location, MapsApi, PricingApi, Vehicle, VehicleRequest};

#[derive(Debug, Error)]
pub enum VehicleServiceError {
	#[error("vehicle not found: {0}")]
	NotFound(i64),
	#[error("validation error: {0}")]
	Validation(String),
	#[error("storage error: {0}")]
	Storage(String),
	#[error("pricing service error: {0}")]
	Pricing(String),
	#[error("maps service error: {0}")]
	Maps(String),
}

/// Service interface the API layer programs against
#[async_trait]
pub trait VehicleServiceTrait: Send + Sync {
	/// All persisted vehicles, without enrichment
	async fn list_vehicles(&self) -> Result<Vec<Vehicle>, VehicleServiceError>;

	/// One vehicle, enriched with price and resolved address
	async fn find_by_id(&self, vehicle_id: i64) -> Result<Vehicle, VehicleServiceError>;

	/// Create (no id) or update (id present) a vehicle
	async fn save_vehicle(&self, request: VehicleRequest)
		-> Result<Vehicle, VehicleServiceError>;

	/// Delete a vehicle by id
	async fn delete_vehicle(&self, vehicle_id: i64) -> Result<(), VehicleServiceError>;
}

#[derive(Clone)]
pub struct VehicleService {
	storage: Arc<dyn Storage>,
	pricing: Arc<dyn PricingApi>,
	maps: Arc<dyn MapsApi>,
}

impl VehicleService {
	pub fn new(
		storage: Arc<dyn Storage>,
		pricing: Arc<dyn PricingApi>,
		maps: Arc<dyn MapsApi>,
	) -> Self {
		Self {
			storage,
			pricing,
			maps,
		}
	}

	async fn price_for(&self, vehicle_id: i64) -> Result<String, VehicleServiceError> {
		let price = self
			.pricing
			.price_for_vehicle(vehicle_id)
			.await
			.map_err(|e| VehicleServiceError::Pricing(e.to_string()))?;
		Ok(price.display())
	}

	async fn resolved_location(
		&self,
		location: &Location,
	) -> Result<Location, VehicleServiceError> {
		let address = self
			.maps
			.address_for(location.lat, location.lon)
			.await
			.map_err(|e| VehicleServiceError::Maps(e.to_string()))?;
		Ok(location.with_address(&address))
	}
}

#[async_trait]
impl VehicleServiceTrait for VehicleService {
	async fn list_vehicles(&self) -> Result<Vec<Vehicle>, VehicleServiceError> {
		self.storage
			.list_all_vehicles()
			.await
			.map_err(|e| VehicleServiceError::Storage(e.to_string()))
	}

	async fn find_by_id(&self, vehicle_id: i64) -> Result<Vehicle, VehicleServiceError> {
		let mut vehicle = self
			.storage
			.get_vehicle(vehicle_id)
			.await
			.map_err(|e| VehicleServiceError::Storage(e.to_string()))?
			.ok_or(VehicleServiceError::NotFound(vehicle_id))?;

		// Sequential outbound calls; either failure fails the read
		vehicle.price = Some(self.price_for(vehicle_id).await?);
		vehicle.location = self.resolved_location(&vehicle.location).await?;

		debug!(vehicle_id, "vehicle enriched");
		Ok(vehicle)
	}

	async fn save_vehicle(
		&self,
		request: VehicleRequest,
	) -> Result<Vehicle, VehicleServiceError> {
		request
			.validate()
			.map_err(|e| VehicleServiceError::Validation(e.to_string()))?;

		match request.id {
			Some(id) => {
				// Update: only details and location are overwritten
				let mut existing = self
					.storage
					.get_vehicle(id)
					.await
					.map_err(|e| VehicleServiceError::Storage(e.to_string()))?
					.ok_or(VehicleServiceError::NotFound(id))?;

				existing.details = request.details;
				existing.location = request.location.coordinates();

				self.storage
					.update_vehicle(existing)
					.await
					.map_err(|e| VehicleServiceError::Storage(e.to_string()))
			},
			None => {
				let vehicle = Vehicle::new(request.condition, request.details, request.location);
				self.storage
					.create_vehicle(vehicle)
					.await
					.map_err(|e| VehicleServiceError::Storage(e.to_string()))
			},
		}
	}

	async fn delete_vehicle(&self, vehicle_id: i64) -> Result<(), VehicleServiceError> {
		let removed = self
			.storage
			.remove_vehicle(vehicle_id)
			.await
			.map_err(|e| VehicleServiceError::Storage(e.to_string()))?;

		if !removed {
			return Err(VehicleServiceError::NotFound(vehicle_id));
		}

		debug!(vehicle_id, "vehicle deleted");
		Ok(())
	}
}
