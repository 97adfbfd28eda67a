//! Enrichment E2E tests
//!
//! Single-record reads against the real pricing and maps stubs, plus
//! failure propagation when an outbound call fails.

mod mocks;

use crate::mocks::{Fixtures, TestServer};
use reqwest::Client;

#[tokio::test]
async fn test_get_by_id_enriches_from_stub_services() {
	let (server, pricing, maps) = TestServer::spawn_with_stub_services()
		.await
		.expect("Failed to start test servers");
	let client = Client::new();

	let created: serde_json::Value = client
		.post(format!("{}/api/v1/vehicles", server.base_url))
		.json(&Fixtures::impala())
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let id = created["id"].as_i64().unwrap();

	// First assigned id is 1, which the pricing stub has a price for
	let resp = client
		.get(format!("{}/api/v1/vehicles/{}", server.base_url, id))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	let price = body["price"].as_str().unwrap();
	assert!(price.starts_with("USD "));
	assert!(body["location"]["address"].is_string());
	assert!(body["location"]["city"].is_string());
	assert!(body["location"]["state"].is_string());
	assert!(body["location"]["zip"].is_string());
	// Coordinates survive enrichment
	assert_eq!(body["location"]["lat"], 40.73061);

	server.abort();
	pricing.abort();
	maps.abort();
}

#[tokio::test]
async fn test_enrichment_is_not_persisted() {
	let (server, pricing, maps) = TestServer::spawn_with_stub_services()
		.await
		.expect("Failed to start test servers");
	let client = Client::new();

	let created: serde_json::Value = client
		.post(format!("{}/api/v1/vehicles", server.base_url))
		.json(&Fixtures::impala())
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let id = created["id"].as_i64().unwrap();

	// Enriched read...
	let one: serde_json::Value = client
		.get(format!("{}/api/v1/vehicles/{}", server.base_url, id))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	assert!(one["price"].is_string());

	// ...leaves the stored record untouched
	let all: serde_json::Value = client
		.get(format!("{}/api/v1/vehicles", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let listed = &all["vehicles"].as_array().unwrap()[0];
	assert!(listed["price"].is_null());
	assert!(listed["location"]["address"].is_null());

	server.abort();
	pricing.abort();
	maps.abort();
}

#[tokio::test]
async fn test_pricing_failure_fails_the_read() {
	let server = TestServer::spawn_with_failing_pricing()
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let created: serde_json::Value = client
		.post(format!("{}/api/v1/vehicles", server.base_url))
		.json(&Fixtures::impala())
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let id = created["id"].as_i64().unwrap();

	let resp = client
		.get(format!("{}/api/v1/vehicles/{}", server.base_url, id))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), 502);

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "PRICING_UNAVAILABLE");

	server.abort();
}

#[tokio::test]
async fn test_ready_reports_stub_health() {
	let (server, pricing, maps) = TestServer::spawn_with_stub_services()
		.await
		.expect("Failed to start test servers");
	let client = Client::new();

	let resp = client
		.get(format!("{}/ready", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "ready");
	assert_eq!(body["storage_healthy"], true);
	assert_eq!(body["pricing_healthy"], true);
	assert_eq!(body["maps_healthy"], true);

	server.abort();
	pricing.abort();
	maps.abort();
}
