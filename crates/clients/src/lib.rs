//! Vehicles Clients
//!
//! HTTP clients for the external pricing and maps services.

pub mod maps_client;
pub mod pricing_client;

pub use maps_client::MapsClient;
pub use pricing_client::PricingClient;
pub use vehicles_types::{ClientError, ClientResult, MapsApi, PricingApi};
