use std::sync::Arc;

use vehicles_service::VehicleServiceTrait;
use vehicles_storage::Storage;
use vehicles_types::{MapsApi, PricingApi};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub vehicle_service: Arc<dyn VehicleServiceTrait>,
	pub storage: Arc<dyn Storage>,
	pub pricing_client: Arc<dyn PricingApi>,
	pub maps_client: Arc<dyn MapsApi>,
}
