//! Mock clients and fixtures for examples and testing
//!
//! Simple, working mock clients that can stand in for the pricing and
//! maps services without network access.

use async_trait::async_trait;

use vehicles_types::{
	Address, ClientError, ClientResult, Condition, Details, Location, Manufacturer, MapsApi,
	Price, PricingApi, VehicleRequest,
};

/// Mock pricing client returning a fixed price for every vehicle id
#[derive(Debug, Clone)]
pub struct MockPricingClient {
	pub currency: String,
	pub price: f64,
}

impl MockPricingClient {
	pub fn new(currency: &str, price: f64) -> Self {
		Self {
			currency: currency.to_string(),
			price,
		}
	}
}

impl Default for MockPricingClient {
	fn default() -> Self {
		Self::new("USD", 20145.62)
	}
}

#[async_trait]
impl PricingApi for MockPricingClient {
	async fn price_for_vehicle(&self, vehicle_id: i64) -> ClientResult<Price> {
		Ok(Price {
			vehicle_id,
			currency: self.currency.clone(),
			price: self.price,
		})
	}
}

/// Mock pricing client that fails every lookup
#[derive(Debug, Clone, Default)]
pub struct FailingPricingClient;

#[async_trait]
impl PricingApi for FailingPricingClient {
	async fn price_for_vehicle(&self, vehicle_id: i64) -> ClientResult<Price> {
		Err(ClientError::UnexpectedStatus {
			service: "pricing",
			status: 400,
			message: format!("Cannot get price for vehicle {}", vehicle_id),
		})
	}

	async fn health_check(&self) -> ClientResult<bool> {
		Ok(false)
	}
}

/// Mock maps client returning a fixed address for every coordinate pair
#[derive(Debug, Clone)]
pub struct MockMapsClient {
	pub address: Address,
}

impl Default for MockMapsClient {
	fn default() -> Self {
		Self {
			address: Address {
				address: "600 Vanderbilt Avenue".to_string(),
				city: "Brooklyn".to_string(),
				state: "NY".to_string(),
				zip: "11238".to_string(),
			},
		}
	}
}

#[async_trait]
impl MapsApi for MockMapsClient {
	async fn address_for(&self, _lat: f64, _lon: f64) -> ClientResult<Address> {
		Ok(self.address.clone())
	}
}

/// A used Chevrolet Impala listed in Queens
pub fn mock_vehicle() -> VehicleRequest {
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

/// A new Audi A4 listed in Chicago
pub fn mock_vehicle_audi() -> VehicleRequest {
	VehicleRequest {
		id: None,
		condition: Condition::New,
		details: Details {
			body: "sedan".to_string(),
			model: "A4".to_string(),
			manufacturer: Manufacturer {
				code: 100,
				name: "Audi".to_string(),
			},
			number_of_doors: Some(4),
			fuel_type: Some("Gasoline".to_string()),
			engine: Some("2.0L TFSI".to_string()),
			mileage: Some(12),
			model_year: Some(2024),
			production_year: Some(2024),
			external_color: Some("black".to_string()),
		},
		location: Location::new(41.87811, -87.629798),
	}
}
