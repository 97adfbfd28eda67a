//! HTTP client for the pricing service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use vehicles_types::{ClientError, ClientResult, Price, PricingApi};

/// Path of the price lookup resource on the pricing service
const PRICE_PATH: &str = "/services/price";

/// Pricing service client over HTTP
#[derive(Debug, Clone)]
pub struct PricingClient {
	client: Client,
	endpoint: String,
}

impl PricingClient {
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
impl PricingApi for PricingClient {
	async fn price_for_vehicle(&self, vehicle_id: i64) -> ClientResult<Price> {
		let url = format!("{}{}", self.endpoint, PRICE_PATH);
		debug!(vehicle_id, url = %url, "requesting price");

		let response = self
			.client
			.get(&url)
			.query(&[("vehicleId", vehicle_id)])
			.send()
			.await?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let message = response.text().await.unwrap_or_default();
			return Err(ClientError::UnexpectedStatus {
				service: "pricing",
				status,
				message,
			});
		}

		Ok(response.json::<Price>().await?)
	}

	async fn health_check(&self) -> ClientResult<bool> {
		let url = format!("{}/health", self.endpoint);
		let response = self.client.get(&url).send().await?;
		Ok(response.status().is_success())
	}
}
