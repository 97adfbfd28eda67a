//! In-memory storage implementation using DashMap

use crate::traits::{Storage, StorageError, StorageResult, StorageStats, VehicleStorage};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::debug;
use vehicles_types::Vehicle;

/// In-memory vehicle store with a process-local id sequence
#[derive(Clone)]
pub struct MemoryStore {
	vehicles: Arc<DashMap<i64, Vehicle>>,
	next_id: Arc<AtomicI64>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self {
			vehicles: Arc::new(DashMap::new()),
			next_id: Arc::new(AtomicI64::new(1)),
		}
	}

	fn allocate_id(&self) -> i64 {
		self.next_id.fetch_add(1, Ordering::SeqCst)
	}

	/// Normalize a vehicle for persistence: transient enrichment fields
	/// are never stored
	fn persisted(mut vehicle: Vehicle) -> Vehicle {
		vehicle.price = None;
		vehicle.location = vehicle.location.coordinates();
		vehicle
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl VehicleStorage for MemoryStore {
	async fn create_vehicle(&self, vehicle: Vehicle) -> StorageResult<Vehicle> {
		let mut vehicle = Self::persisted(vehicle);
		vehicle.id = self.allocate_id();
		let now = Utc::now();
		vehicle.created_at = now;
		vehicle.modified_at = now;

		debug!(vehicle_id = vehicle.id, "creating vehicle");
		self.vehicles.insert(vehicle.id, vehicle.clone());
		Ok(vehicle)
	}

	async fn get_vehicle(&self, vehicle_id: i64) -> StorageResult<Option<Vehicle>> {
		Ok(self.vehicles.get(&vehicle_id).map(|entry| entry.clone()))
	}

	async fn update_vehicle(&self, vehicle: Vehicle) -> StorageResult<Vehicle> {
		let existing = self
			.vehicles
			.get(&vehicle.id)
			.map(|entry| entry.clone())
			.ok_or(StorageError::NotFound { id: vehicle.id })?;

		let mut vehicle = Self::persisted(vehicle);
		vehicle.created_at = existing.created_at;
		vehicle.modified_at = Utc::now();

		debug!(vehicle_id = vehicle.id, "updating vehicle");
		self.vehicles.insert(vehicle.id, vehicle.clone());
		Ok(vehicle)
	}

	async fn remove_vehicle(&self, vehicle_id: i64) -> StorageResult<bool> {
		Ok(self.vehicles.remove(&vehicle_id).is_some())
	}

	async fn list_all_vehicles(&self) -> StorageResult<Vec<Vehicle>> {
		let mut vehicles: Vec<Vehicle> =
			self.vehicles.iter().map(|entry| entry.clone()).collect();
		vehicles.sort_by_key(|vehicle| vehicle.id);
		Ok(vehicles)
	}

	async fn count_vehicles(&self) -> StorageResult<usize> {
		Ok(self.vehicles.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_vehicles: self.vehicles.len(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vehicles_types::{Condition, Details, Location, Manufacturer};

	fn vehicle() -> Vehicle {
		Vehicle::new(
			Condition::Used,
			Details {
				body: "sedan".to_string(),
				model: "Impala".to_string(),
				manufacturer: Manufacturer {
					code: 101,
					name: "Chevrolet".to_string(),
				},
				number_of_doors: Some(4),
				fuel_type: Some("Gasoline".to_string()),
				engine: Some("3.6L V6".to_string()),
				mileage: Some(32280),
				model_year: Some(2018),
				production_year: Some(2018),
				external_color: Some("white".to_string()),
			},
			Location::new(40.73061, -73.935242),
		)
	}

	#[tokio::test]
	async fn create_assigns_sequential_ids() {
		let store = MemoryStore::new();

		let first = store.create_vehicle(vehicle()).await.unwrap();
		let second = store.create_vehicle(vehicle()).await.unwrap();

		assert_eq!(first.id, 1);
		assert_eq!(second.id, 2);
		assert_eq!(store.count_vehicles().await.unwrap(), 2);
	}

	#[tokio::test]
	async fn create_never_persists_enrichment() {
		let store = MemoryStore::new();

		let mut enriched = vehicle();
		enriched.price = Some("USD 9999.99".to_string());
		enriched.location.address = Some("600 Vanderbilt Avenue".to_string());

		let created = store.create_vehicle(enriched).await.unwrap();
		assert!(created.price.is_none());
		assert!(!created.location.is_resolved());

		let stored = store.get_vehicle(created.id).await.unwrap().unwrap();
		assert!(stored.price.is_none());
		assert!(!stored.location.is_resolved());
	}

	#[tokio::test]
	async fn update_missing_vehicle_fails() {
		let store = MemoryStore::new();

		let mut ghost = vehicle();
		ghost.id = 42;

		assert!(matches!(
			store.update_vehicle(ghost).await,
			Err(StorageError::NotFound { id: 42 })
		));
	}

	#[tokio::test]
	async fn update_preserves_created_at() {
		let store = MemoryStore::new();

		let created = store.create_vehicle(vehicle()).await.unwrap();

		let mut changed = created.clone();
		changed.details.external_color = Some("red".to_string());
		let updated = store.update_vehicle(changed).await.unwrap();

		assert_eq!(updated.created_at, created.created_at);
		assert_eq!(updated.details.external_color.as_deref(), Some("red"));
	}

	#[tokio::test]
	async fn remove_reports_existence() {
		let store = MemoryStore::new();

		let created = store.create_vehicle(vehicle()).await.unwrap();

		assert!(store.remove_vehicle(created.id).await.unwrap());
		assert!(!store.remove_vehicle(created.id).await.unwrap());
		assert!(store.get_vehicle(created.id).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn list_is_ordered_by_id() {
		let store = MemoryStore::new();

		for _ in 0..5 {
			store.create_vehicle(vehicle()).await.unwrap();
		}

		let all = store.list_all_vehicles().await.unwrap();
		let ids: Vec<i64> = all.iter().map(|v| v.id).collect();
		assert_eq!(ids, vec![1, 2, 3, 4, 5]);
	}
}
