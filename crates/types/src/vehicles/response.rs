//! Vehicle response models for API layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
#[allow(unused_imports)]
use serde_json::json;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{Condition, Details, Vehicle};
use crate::models::Location;

/// Response format for individual vehicles in API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = json!({
    "id": 1,
    "condition": "USED",
    "details": {
        "body": "sedan",
        "model": "Impala",
        "manufacturer": { "code": 101, "name": "Chevrolet" }
    },
    "location": {
        "lat": 40.73061,
        "lon": -73.935242,
        "address": "600 Vanderbilt Avenue",
        "city": "Brooklyn",
        "state": "NY",
        "zip": "11238"
    },
    "price": "USD 20145.62",
    "createdAt": 1756400000,
    "modifiedAt": 1756457492
})))]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
	pub id: i64,
	pub condition: Condition,
	pub details: Details,
	pub location: Location,
	/// Present on enriched single-record reads only
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub price: Option<String>,
	pub created_at: i64,
	pub modified_at: i64,
}

impl From<&Vehicle> for VehicleResponse {
	fn from(vehicle: &Vehicle) -> Self {
		Self {
			id: vehicle.id,
			condition: vehicle.condition,
			details: vehicle.details.clone(),
			location: vehicle.location.clone(),
			price: vehicle.price.clone(),
			created_at: vehicle.created_at.timestamp(),
			modified_at: vehicle.modified_at.timestamp(),
		}
	}
}

/// Collection of vehicles response for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VehiclesResponse {
	pub vehicles: Vec<VehicleResponse>,
	pub total_vehicles: usize,
	pub timestamp: i64,
}
