//! Core Vehicle domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::models::Location;

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{
	VehicleError, VehicleResult, VehicleValidationError, VehicleValidationResult,
};
pub use request::VehicleRequest;
pub use response::{VehicleResponse, VehiclesResponse};

/// Core Vehicle domain model
///
/// This represents a vehicle record in the domain layer. It is converted
/// from VehicleRequest on writes and to VehicleResponse on reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
	/// Store-assigned identifier; 0 until the store assigns one
	pub id: i64,

	/// Whether the vehicle is new or used
	pub condition: Condition,

	/// Descriptive data about the vehicle
	pub details: Details,

	/// Coordinates where the vehicle is listed
	pub location: Location,

	/// Rendered price from the pricing service; populated on
	/// single-record reads only, never persisted
	pub price: Option<String>,

	/// When the record was created
	pub created_at: DateTime<Utc>,

	/// Last time the record was written
	pub modified_at: DateTime<Utc>,
}

impl Vehicle {
	/// Create a new, not-yet-persisted vehicle
	pub fn new(condition: Condition, details: Details, location: Location) -> Self {
		let now = Utc::now();
		Self {
			id: 0,
			condition,
			details,
			location: location.coordinates(),
			price: None,
			created_at: now,
			modified_at: now,
		}
	}
}

/// Vehicle condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
	New,
	Used,
}

/// Vehicle manufacturer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
	pub code: i32,
	pub name: String,
}

/// Descriptive details about a vehicle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Details {
	/// Body type (sedan, SUV, ...)
	pub body: String,

	/// Model name
	pub model: String,

	pub manufacturer: Manufacturer,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub number_of_doors: Option<u8>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fuel_type: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub engine: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mileage: Option<u32>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub model_year: Option<i32>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub production_year: Option<i32>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_color: Option<String>,
}
