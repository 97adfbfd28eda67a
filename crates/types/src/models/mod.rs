//! Shared domain and wire models
//!
//! Location is persisted with the vehicle (coordinates only); Price and
//! Address are the payloads returned by the pricing and maps services.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Vehicle location
///
/// Only `lat`/`lon` are persisted. The resolved address fields are
/// populated on single-record reads from the maps service and discarded
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Location {
	/// Latitude in degrees, [-90, 90]
	pub lat: f64,

	/// Longitude in degrees, [-180, 180]
	pub lon: f64,

	/// Resolved street address
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,

	/// Resolved city
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,

	/// Resolved state
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,

	/// Resolved zip code
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub zip: Option<String>,
}

impl Location {
	/// Create a location from plain coordinates
	pub fn new(lat: f64, lon: f64) -> Self {
		Self {
			lat,
			lon,
			address: None,
			city: None,
			state: None,
			zip: None,
		}
	}

	/// Copy of this location with any resolved address data dropped
	pub fn coordinates(&self) -> Self {
		Self::new(self.lat, self.lon)
	}

	/// Copy of this location carrying the resolved address
	pub fn with_address(&self, address: &Address) -> Self {
		Self {
			lat: self.lat,
			lon: self.lon,
			address: Some(address.address.clone()),
			city: Some(address.city.clone()),
			state: Some(address.state.clone()),
			zip: Some(address.zip.clone()),
		}
	}

	/// Whether the resolved address fields are populated
	pub fn is_resolved(&self) -> bool {
		self.address.is_some()
	}
}

/// Price payload returned by the pricing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Price {
	pub vehicle_id: i64,
	pub currency: String,
	pub price: f64,
}

impl Price {
	/// Render the price the way it is attached to a vehicle read
	pub fn display(&self) -> String {
		format!("{} {:.2}", self.currency, self.price)
	}
}

/// Address payload returned by the maps service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Address {
	pub address: String,
	pub city: String,
	pub state: String,
	pub zip: String,
}
