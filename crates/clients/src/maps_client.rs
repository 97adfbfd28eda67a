//! HTTP client for the maps service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use vehicles_types::{Address, ClientError, ClientResult, MapsApi};

/// Path of the address lookup resource on the maps service
const MAPS_PATH: &str = "/maps";

/// Maps service client over HTTP
#[derive(Debug, Clone)]
pub struct MapsClient {
	client: Client,
	endpoint: String,
}

impl MapsClient {
	/// Create a client for the given base endpoint with a request timeout
	pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> ClientResult<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(timeout_ms))
			.build()?;

		Ok(Self {
			client,
			endpoint: endpoint.into().trim_end_matches('/').to_string(),
		})
	}
}

#[async_trait]
impl MapsApi for MapsClient {
	async fn address_for(&self, lat: f64, lon: f64) -> ClientResult<Address> {
		let url = format!("{}{}", self.endpoint, MAPS_PATH);
		debug!(lat, lon, url = %url, "requesting address");

		let response = self
			.client
			.get(&url)
			.query(&[("lat", lat), ("lon", lon)])
			.send()
			.await?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let message = response.text().await.unwrap_or_default();
			return Err(ClientError::UnexpectedStatus {
				service: "maps",
				status,
				message,
			});
		}

		Ok(response.json::<Address>().await?)
	}

	async fn health_check(&self) -> ClientResult<bool> {
		let url = format!("{}/health", self.endpoint);
		let response = self.client.get(&url).send().await?;
		Ok(response.status().is_success())
	}
}
