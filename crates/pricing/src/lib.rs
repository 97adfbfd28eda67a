//! Pricing Service
//!
//! Stub service holding a synthetic price per vehicle id. Prices are
//! generated once per process for a fixed range of ids; everything else
//! is an error, no persistence involved.

use axum::{extract::Query, http::StatusCode, response::Json, routing::get, Router};
use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use vehicles_types::Price;

/// Ids 1..=PRICE_TABLE_SIZE have a price; anything else is unknown
pub const PRICE_TABLE_SIZE: i64 = 20;

/// Prices generated once per process
static PRICES: Lazy<HashMap<i64, Price>> = Lazy::new(|| {
	let mut rng = rand::thread_rng();
	(1..=PRICE_TABLE_SIZE)
		.map(|id| {
			(
				id,
				Price {
					vehicle_id: id,
					currency: "USD".to_string(),
					price: random_price(&mut rng),
				},
			)
		})
		.collect()
});

/// Two-decimal amount between 1.00 and 5000.00
fn random_price<R: Rng>(rng: &mut R) -> f64 {
	(rng.gen_range(100..=500_000) as f64) / 100.0
}

#[derive(Debug, Error)]
pub enum PriceError {
	#[error("Cannot get price for vehicle {vehicle_id}")]
	UnknownVehicleId { vehicle_id: i64 },
}

/// Look up the price for a vehicle id
pub fn price_for(vehicle_id: i64) -> Result<Price, PriceError> {
	PRICES
		.get(&vehicle_id)
		.cloned()
		.ok_or(PriceError::UnknownVehicleId { vehicle_id })
}

/// Error response format for the stub API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
	pub vehicle_id: i64,
}

/// GET /services/price?vehicleId=N
pub async fn get_price(
	Query(query): Query<PriceQuery>,
) -> Result<Json<Price>, (StatusCode, Json<ErrorResponse>)> {
	debug!(vehicle_id = query.vehicle_id, "price lookup");

	match price_for(query.vehicle_id) {
		Ok(price) => Ok(Json(price)),
		Err(e) => Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse {
				error: "PRICE_NOT_FOUND".to_string(),
				message: e.to_string(),
				timestamp: chrono::Utc::now().timestamp(),
			}),
		)),
	}
}

/// Health check endpoint
pub async fn health() -> &'static str {
	"OK"
}

pub fn create_router() -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/services/price", get(get_price))
}
