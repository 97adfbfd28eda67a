//! Test servers for integration tests
//!
//! Provides a vehicles server backed by mock clients for CRUD tests, and
//! a full three-server setup (vehicles + pricing stub + maps stub) for
//! enrichment tests.

use std::sync::Arc;

use axum::Router;
use tokio::task::JoinHandle;

use vehicles_server::mocks::{FailingPricingClient, MockMapsClient, MockPricingClient};
use vehicles_server::{Settings, VehiclesBuilder};

/// Test server instance listening on an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Spawn a vehicles server with mock pricing and maps clients
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_mock_clients().await
	}

	/// Spawn a vehicles server with mock pricing and maps clients
	pub async fn spawn_with_mock_clients() -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = VehiclesBuilder::new()
			.with_pricing_client(Arc::new(MockPricingClient::default()))
			.with_maps_client(Arc::new(MockMapsClient::default()))
			.start()
			.await?;

		Self::spawn_app(app).await
	}

	/// Spawn a vehicles server whose pricing client fails every lookup
	pub async fn spawn_with_failing_pricing() -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = VehiclesBuilder::new()
			.with_pricing_client(Arc::new(FailingPricingClient))
			.with_maps_client(Arc::new(MockMapsClient::default()))
			.start()
			.await?;

		Self::spawn_app(app).await
	}

	/// Spawn the real pricing and maps stubs, then a vehicles server with
	/// HTTP clients pointed at them
	pub async fn spawn_with_stub_services(
	) -> Result<(Self, Self, Self), Box<dyn std::error::Error>> {
		let pricing = Self::spawn_app(pricing_service::create_router()).await?;
		let maps = Self::spawn_app(maps_service::create_router()).await?;

		let mut settings = Settings::default();
		settings.pricing.endpoint = pricing.base_url.clone();
		settings.maps.endpoint = maps.base_url.clone();

		let (app, _state) = VehiclesBuilder::new()
			.with_settings(settings)
			.start()
			.await?;
		let vehicles = Self::spawn_app(app).await?;

		Ok((vehicles, pricing, maps))
	}

	/// Bind an app on an ephemeral port and serve it in the background
	pub async fn spawn_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;

		let handle = tokio::spawn(async move {
			axum::serve(listener, app)
				.await
				.expect("test server failed");
		});

		Ok(Self {
			base_url: format!("http://{}", addr),
			handle,
		})
	}

	pub fn abort(&self) {
		self.handle.abort();
	}
}
