//! Domain entity fixtures for testing

use vehicles_server::serde_json::{json, Value};

/// Request body builders for tests
#[allow(dead_code)]
pub struct Fixtures;

#[allow(dead_code)]
impl Fixtures {
	/// Valid create request without an id
	pub fn impala() -> Value {
		json!({
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
		})
	}

	/// Update payload moving the Impala and repainting it
	pub fn impala_update() -> Value {
		json!({
			"condition": "NEW",
			"details": {
				"body": "sedan",
				"model": "Impala",
				"manufacturer": { "code": 101, "name": "Chevrolet" },
				"externalColor": "red"
			},
			"location": { "lat": 41.87811, "lon": -87.629798 }
		})
	}

	/// Request with an out-of-range latitude
	pub fn invalid_latitude() -> Value {
		let mut body = Self::impala();
		body["location"]["lat"] = json!(120.5);
		body
	}
}
