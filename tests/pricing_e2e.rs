//! Pricing stub E2E tests
//!
//! Tests for the pricing service HTTP surface: seeded ids resolve to a
//! positive price, everything else is a client error.

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_get_price_for_seeded_id() {
	let server = TestServer::spawn_app(pricing_service::create_router())
		.await
		.expect("Failed to start pricing stub");
	let client = Client::new();

	let resp = client
		.get(format!("{}/services/price?vehicleId=10", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["vehicleId"], 10);
	assert_eq!(body["currency"], "USD");
	assert!(body["price"].as_f64().unwrap() > 0.0);

	server.abort();
}

#[tokio::test]
async fn test_get_price_for_out_of_range_id() {
	let server = TestServer::spawn_app(pricing_service::create_router())
		.await
		.expect("Failed to start pricing stub");
	let client = Client::new();

	let resp = client
		.get(format!("{}/services/price?vehicleId=200", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 400);

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "PRICE_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_maps_stub_returns_address() {
	let server = TestServer::spawn_app(maps_service::create_router())
		.await
		.expect("Failed to start maps stub");
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/maps?lat=40.73061&lon=-73.935242",
			server.base_url
		))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	assert!(body["address"].is_string());
	assert!(body["city"].is_string());
	assert!(body["state"].is_string());
	assert!(body["zip"].is_string());

	server.abort();
}

#[tokio::test]
async fn test_maps_stub_rejects_out_of_range_coordinates() {
	let server = TestServer::spawn_app(maps_service::create_router())
		.await
		.expect("Failed to start maps stub");
	let client = Client::new();

	let resp = client
		.get(format!("{}/maps?lat=120.0&lon=0.0", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 400);

	server.abort();
}
