//! Storage traits for pluggable storage implementations

// Re-export the storage traits from types crate
pub use vehicles_types::storage::{
	StorageError, StorageResult, StorageStats, StorageTrait as Storage,
	VehicleStorageTrait as VehicleStorage,
};
