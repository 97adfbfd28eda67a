//! Maps Service
//!
//! Stub service resolving a coordinate pair to a synthetic street address.
//! Any in-range coordinates get a random address from a fixed pool.

use axum::{extract::Query, http::StatusCode, response::Json, routing::get, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vehicles_types::Address;

/// Fixed pool the stub hands addresses out of
const ADDRESSES: &[(&str, &str, &str, &str)] = &[
	("777 Brockton Avenue", "Abington", "MA", "2351"),
	("30 Memorial Drive", "Avon", "MA", "2322"),
	("250 Hartford Avenue", "Bellingham", "MA", "2019"),
	("700 Oak Street", "Brockton", "MA", "2301"),
	("66-4 Parkhurst Rd", "Chelmsford", "MA", "1824"),
	("591 Memorial Dr", "Chicopee", "MA", "1020"),
	("55 Brooksby Village Way", "Danvers", "MA", "1923"),
	("137 Teaticket Hwy", "East Falmouth", "MA", "2536"),
];

/// Pick a synthetic address for the given coordinates
///
/// The coordinates do not influence the result; the stub only validates
/// their ranges.
pub fn random_address() -> Address {
	let mut rng = rand::thread_rng();
	let (address, city, state, zip) = ADDRESSES
		.choose(&mut rng)
		.copied()
		.unwrap_or(ADDRESSES[0]);

	Address {
		address: address.to_string(),
		city: city.to_string(),
		state: state.to_string(),
		zip: zip.to_string(),
	}
}

/// Error response format for the stub API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
pub struct MapsQuery {
	pub lat: f64,
	pub lon: f64,
}

/// GET /maps?lat=..&lon=..
pub async fn get_address(
	Query(query): Query<MapsQuery>,
) -> Result<Json<Address>, (StatusCode, Json<ErrorResponse>)> {
	if !(-90.0..=90.0).contains(&query.lat) || !(-180.0..=180.0).contains(&query.lon) {
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse {
				error: "INVALID_COORDINATES".to_string(),
				message: format!("Coordinates out of range: lat={}, lon={}", query.lat, query.lon),
				timestamp: chrono::Utc::now().timestamp(),
			}),
		));
	}

	debug!(lat = query.lat, lon = query.lon, "address lookup");
	Ok(Json(random_address()))
}

/// Health check endpoint
pub async fn health() -> &'static str {
	"OK"
}

pub fn create_router() -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/maps", get(get_address))
}
