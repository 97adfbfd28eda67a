//! Outbound client traits for the pricing and maps services
//!
//! The HTTP implementations live in the clients crate; these traits are the
//! seam the service layer and tests program against.

use crate::models::{Address, Price};
use async_trait::async_trait;
use thiserror::Error;

/// Outbound client errors
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Unexpected status {status} from {service}: {message}")]
	UnexpectedStatus {
		service: &'static str,
		status: u16,
		message: String,
	},

	#[error("Invalid response payload: {0}")]
	Deserialization(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Client for the pricing service
#[async_trait]
pub trait PricingApi: Send + Sync {
	/// Fetch the price for a vehicle id
	async fn price_for_vehicle(&self, vehicle_id: i64) -> ClientResult<Price>;

	/// Whether the service is reachable
	async fn health_check(&self) -> ClientResult<bool> {
		Ok(true)
	}
}

/// Client for the maps service
#[async_trait]
pub trait MapsApi: Send + Sync {
	/// Resolve a street address for a coordinate pair
	async fn address_for(&self, lat: f64, lon: f64) -> ClientResult<Address>;

	/// Whether the service is reachable
	async fn health_check(&self) -> ClientResult<bool> {
		Ok(true)
	}
}
