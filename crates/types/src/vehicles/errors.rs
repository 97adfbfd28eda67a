//! Error types for vehicle operations

use thiserror::Error;

/// Validation errors for vehicle requests
#[derive(Error, Debug)]
pub enum VehicleValidationError {
	#[error("Invalid latitude: {lat} (must be between -90 and 90)")]
	InvalidLatitude { lat: f64 },

	#[error("Invalid longitude: {lon} (must be between -180 and 180)")]
	InvalidLongitude { lon: f64 },

	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },
}

pub type VehicleValidationResult<T> = Result<T, VehicleValidationError>;

/// Vehicle operation errors
#[derive(Error, Debug)]
pub enum VehicleError {
	#[error("Vehicle validation failed: {0}")]
	Validation(#[from] VehicleValidationError),

	#[error("Vehicle not found: {vehicle_id}")]
	NotFound { vehicle_id: i64 },

	#[error("Storage error: {0}")]
	Storage(String),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type VehicleResult<T> = Result<T, VehicleError>;
