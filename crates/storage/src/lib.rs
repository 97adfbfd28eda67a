//! Vehicles Storage
//!
//! Storage backends for the Vehicles API.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::{Storage, StorageError, StorageResult, StorageStats, VehicleStorage};
