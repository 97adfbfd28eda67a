//! Vehicles Service
//!
//! Core logic for vehicle CRUD and read-time enrichment.

pub mod vehicle;

pub use vehicle::{VehicleService, VehicleServiceError, VehicleServiceTrait};
