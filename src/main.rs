//! Vehicles API Server
//!
//! Main entry point for the vehicles server

use vehicles_server::VehiclesBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	VehiclesBuilder::new().start_server().await
}
