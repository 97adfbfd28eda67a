//! Shared domain models and traits for the Vehicles API
//!
//! This crate holds the Vehicle domain model, the request/response wire
//! types, and the traits the other crates implement: storage backends and
//! outbound pricing/maps clients.

pub mod clients;
pub mod models;
pub mod storage;
pub mod vehicles;

// Domain entities
pub use vehicles::{Condition, Details, Manufacturer, Vehicle};

// Wire types
pub use vehicles::{VehicleRequest, VehicleResponse, VehiclesResponse};

// Errors
pub use vehicles::{
	VehicleError, VehicleResult, VehicleValidationError, VehicleValidationResult,
};

// Shared models
pub use models::{Address, Location, Price};

// Storage traits
pub use storage::{StorageError, StorageResult, StorageStats, StorageTrait, VehicleStorageTrait};

// Outbound client traits
pub use clients::{ClientError, ClientResult, MapsApi, PricingApi};

// Re-export external dependencies used in public signatures
pub use chrono;
pub use serde_json;
