//! Storage traits for pluggable storage implementations

use crate::vehicles::Vehicle;
use async_trait::async_trait;
use thiserror::Error;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("Item not found: {id}")]
	NotFound { id: i64 },
	#[error("Storage operation failed: {message}")]
	Operation { message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Statistics about storage usage
#[derive(Debug, Clone)]
pub struct StorageStats {
	pub total_vehicles: usize,
}

/// Trait for vehicle storage operations
#[async_trait]
pub trait VehicleStorageTrait: Send + Sync {
	/// Insert a vehicle, assigning it a fresh id; any caller-supplied id
	/// is ignored
	async fn create_vehicle(&self, vehicle: Vehicle) -> StorageResult<Vehicle>;

	/// Get a vehicle by id
	async fn get_vehicle(&self, vehicle_id: i64) -> StorageResult<Option<Vehicle>>;

	/// Update an existing vehicle
	async fn update_vehicle(&self, vehicle: Vehicle) -> StorageResult<Vehicle>;

	/// Remove a vehicle by id, returning whether it existed
	async fn remove_vehicle(&self, vehicle_id: i64) -> StorageResult<bool>;

	/// Get all vehicles
	async fn list_all_vehicles(&self) -> StorageResult<Vec<Vehicle>>;

	/// Get vehicle count
	async fn count_vehicles(&self) -> StorageResult<usize>;
}

/// Main storage trait that combines all storage operations
#[async_trait]
pub trait StorageTrait: VehicleStorageTrait {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats>;
}
