//! Vehicles API Server Library
//!
//! A CRUD microservice for vehicle listings. Single-record reads are
//! enriched at request time with a price from the pricing service and a
//! resolved street address from the maps service.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

// Core domain types - the most commonly used types
pub use vehicles_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	Address,
	// Error types
	ClientError,
	Condition,
	Details,
	Location,
	Manufacturer,
	// Client traits
	MapsApi,
	Price,
	PricingApi,
	// Primary domain entities
	Vehicle,
	VehicleError,
	VehicleRequest,
	VehicleResponse,
	VehiclesResponse,
};

// Service layer
pub use vehicles_service::{VehicleService, VehicleServiceError, VehicleServiceTrait};

// Storage layer
pub use vehicles_storage::{
	MemoryStore, Storage, StorageError, StorageResult, VehicleStorage,
};

// API layer
pub use vehicles_api::{create_router, AppState};

// Clients
pub use vehicles_clients::{MapsClient, PricingClient};

// Config
pub use vehicles_config::{
	load_config, log_service_info, log_startup_complete, LogFormat, Settings,
};

// Module aliases for library consumers
pub mod models {
	pub use vehicles_types::*;
}

pub mod storage {
	pub use vehicles_storage::*;
}

pub mod clients {
	pub use vehicles_clients::*;
}

pub mod api {
	pub use vehicles_api::*;
	pub mod routes {
		pub use vehicles_api::{create_router, AppState};
	}
}

pub mod service {
	pub use vehicles_service::*;
}

pub mod config {
	pub use vehicles_config::*;
}

pub mod mocks;

// Re-export external dependencies for examples
pub use async_trait;

/// Builder pattern for configuring the vehicles server
pub struct VehiclesBuilder<S = MemoryStore>
where
	S: Storage + Clone + 'static,
{
	settings: Option<Settings>,
	storage: S,
	pricing_client: Option<Arc<dyn PricingApi>>,
	maps_client: Option<Arc<dyn MapsApi>>,
	vehicles: Vec<VehicleRequest>,
}

impl VehiclesBuilder<MemoryStore> {
	/// Create a new builder with default memory storage
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::new())
	}
}

impl Default for VehiclesBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S> VehiclesBuilder<S>
where
	S: Storage + Clone + 'static,
{
	/// Create a new builder with the provided storage
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
			pricing_client: None,
			maps_client: None,
			vehicles: Vec::new(),
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Set a custom pricing client (overrides the HTTP client built from settings)
	pub fn with_pricing_client(mut self, client: Arc<dyn PricingApi>) -> Self {
		self.pricing_client = Some(client);
		self
	}

	/// Set a custom maps client (overrides the HTTP client built from settings)
	pub fn with_maps_client(mut self, client: Arc<dyn MapsApi>) -> Self {
		self.maps_client = Some(client);
		self
	}

	/// Seed a vehicle into storage during startup
	pub fn with_vehicle(mut self, request: VehicleRequest) -> Self {
		self.vehicles.push(request);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		// Initialize tracing with the configuration
		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Seed vehicles collected via with_vehicle() through the service
	async fn seed_vehicles(
		&self,
		service: &VehicleService,
	) -> Result<(), Box<dyn std::error::Error>> {
		for request in &self.vehicles {
			service
				.save_vehicle(request.clone())
				.await
				.map_err(|e| format!("Failed to seed vehicle: {}", e))?;
		}

		if !self.vehicles.is_empty() {
			info!("Seeded {} vehicle(s) into storage", self.vehicles.len());
		}

		Ok(())
	}

	/// Start the server components and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		// Use injected clients or build HTTP clients from settings
		let pricing_client: Arc<dyn PricingApi> = match &self.pricing_client {
			Some(client) => Arc::clone(client),
			None => Arc::new(
				PricingClient::new(
					settings.pricing.endpoint.clone(),
					settings.pricing.timeout_ms,
				)
				.map_err(|e| format!("Failed to build pricing client: {}", e))?,
			),
		};
		let maps_client: Arc<dyn MapsApi> = match &self.maps_client {
			Some(client) => Arc::clone(client),
			None => Arc::new(
				MapsClient::new(settings.maps.endpoint.clone(), settings.maps.timeout_ms)
					.map_err(|e| format!("Failed to build maps client: {}", e))?,
			),
		};

		let storage_arc: Arc<dyn Storage> = Arc::new(self.storage.clone());
		let vehicle_service = VehicleService::new(
			Arc::clone(&storage_arc),
			Arc::clone(&pricing_client),
			Arc::clone(&maps_client),
		);

		self.seed_vehicles(&vehicle_service).await?;

		let total = storage_arc
			.count_vehicles()
			.await
			.map_err(|e| format!("Failed to count vehicles: {}", e))?;
		info!("Successfully initialized with {} vehicle(s)", total);

		// Create application state
		let app_state = AppState {
			vehicle_service: Arc::new(vehicle_service) as Arc<dyn VehicleServiceTrait>,
			storage: storage_arc,
			pricing_client,
			maps_client,
		};

		// Create router with state
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.take().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log comprehensive service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		info!(
			"Outbound services: pricing={} maps={}",
			settings.pricing.endpoint, settings.maps.endpoint
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		// Create the router using the builder pattern
		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		// Log startup completion
		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET    /health");
		info!("  GET    /ready");
		info!("  GET    /api/v1/vehicles");
		info!("  POST   /api/v1/vehicles");
		info!("  GET    /api/v1/vehicles/{{id}}");
		info!("  PUT    /api/v1/vehicles/{{id}}");
		info!("  DELETE /api/v1/vehicles/{{id}}");
		if cfg!(feature = "openapi") {
			info!("  GET    /swagger-ui");
			info!("  GET    /api-docs/openapi.json");
		}

		axum::serve(listener, app).await?;

		Ok(())
	}
}
