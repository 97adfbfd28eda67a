use axum::{http::StatusCode, response::Json};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use vehicles_service::VehicleServiceError;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}

/// Map a service error to the HTTP status and body it surfaces as
pub fn service_error(e: VehicleServiceError) -> (StatusCode, Json<ErrorResponse>) {
	match e {
		VehicleServiceError::NotFound(id) => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"VEHICLE_NOT_FOUND",
				format!("Vehicle {} not found", id),
			)),
		),
		VehicleServiceError::Validation(msg) => (
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new("VALIDATION_ERROR", msg)),
		),
		VehicleServiceError::Pricing(msg) => (
			StatusCode::BAD_GATEWAY,
			Json(ErrorResponse::new("PRICING_UNAVAILABLE", msg)),
		),
		VehicleServiceError::Maps(msg) => (
			StatusCode::BAD_GATEWAY,
			Json(ErrorResponse::new("MAPS_UNAVAILABLE", msg)),
		),
		VehicleServiceError::Storage(msg) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("STORAGE_ERROR", msg)),
		),
	}
}
