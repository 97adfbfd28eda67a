//! Vehicle request model and validation

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
#[allow(unused_imports)]
use serde_json::json;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{Condition, Details, VehicleValidationError, VehicleValidationResult};
use crate::models::Location;

/// API request body for creating or updating a vehicle
///
/// When `id` is present the request updates an existing record (details
/// and location only); otherwise a new record is inserted with a
/// store-assigned id.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = json!({
    "condition": "USED",
    "details": {
        "body": "sedan",
        "model": "Impala",
        "manufacturer": { "code": 101, "name": "Chevrolet" },
        "numberOfDoors": 4,
        "fuelType": "Gasoline",
        "engine": "3.6L V6",
        "mileage": 32280,
        "modelYear": 2018,
        "productionYear": 2018,
        "externalColor": "white"
    },
    "location": { "lat": 40.73061, "lon": -73.935242 }
})))]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
	/// Target record id for updates; absent for creates
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,

	pub condition: Condition,

	pub details: Details,

	pub location: Location,
}

impl VehicleRequest {
	/// Validate a request before it reaches the store
	///
	/// Applied validations:
	/// - coordinates must be within valid latitude/longitude ranges
	/// - model and manufacturer name must be non-empty
	pub fn validate(&self) -> VehicleValidationResult<()> {
		if !(-90.0..=90.0).contains(&self.location.lat) {
			return Err(VehicleValidationError::InvalidLatitude {
				lat: self.location.lat,
			});
		}

		if !(-180.0..=180.0).contains(&self.location.lon) {
			return Err(VehicleValidationError::InvalidLongitude {
				lon: self.location.lon,
			});
		}

		if self.details.model.trim().is_empty() {
			return Err(VehicleValidationError::MissingRequiredField {
				field: "details.model".to_string(),
			});
		}

		if self.details.manufacturer.name.trim().is_empty() {
			return Err(VehicleValidationError::MissingRequiredField {
				field: "details.manufacturer.name".to_string(),
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vehicles::Manufacturer;

	fn request() -> VehicleRequest {
		VehicleRequest {
			id: None,
			condition: Condition::Used,
			details: Details {
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
			location: Location::new(40.73061, -73.935242),
		}
	}

	#[test]
	fn valid_request_passes() {
		assert!(request().validate().is_ok());
	}

	#[test]
	fn out_of_range_latitude_rejected() {
		let mut req = request();
		req.location.lat = 91.0;
		assert!(matches!(
			req.validate(),
			Err(VehicleValidationError::InvalidLatitude { .. })
		));
	}

	#[test]
	fn out_of_range_longitude_rejected() {
		let mut req = request();
		req.location.lon = -200.0;
		assert!(matches!(
			req.validate(),
			Err(VehicleValidationError::InvalidLongitude { .. })
		));
	}

	#[test]
	fn empty_model_rejected() {
		let mut req = request();
		req.details.model = "  ".to_string();
		assert!(matches!(
			req.validate(),
			Err(VehicleValidationError::MissingRequiredField { .. })
		));
	}
}
