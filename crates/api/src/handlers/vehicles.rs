//! Vehicles handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::debug;

use crate::handlers::common::{service_error, ErrorResponse};
use crate::state::AppState;
use vehicles_types::vehicles::response::{VehicleResponse, VehiclesResponse};
use vehicles_types::VehicleRequest;

/// GET /api/v1/vehicles - List all vehicles, without enrichment
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/vehicles",
    responses((status = 200, description = "List of vehicles", body = VehiclesResponse)),
    tag = "vehicles"
))]
pub async fn get_vehicles(
	State(state): State<AppState>,
) -> Result<Json<VehiclesResponse>, (StatusCode, Json<ErrorResponse>)> {
	debug!("Listing vehicles");
	let vehicles = state
		.vehicle_service
		.list_vehicles()
		.await
		.map_err(service_error)?;

	let responses: Vec<VehicleResponse> = vehicles.iter().map(VehicleResponse::from).collect();
	let response = VehiclesResponse {
		total_vehicles: responses.len(),
		vehicles: responses,
		timestamp: chrono::Utc::now().timestamp(),
	};
	Ok(Json(response))
}

/// GET /api/v1/vehicles/{id} - Get a vehicle, enriched with price and address
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle details", body = VehicleResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 502, description = "Pricing or maps service failure", body = ErrorResponse)
    ),
    tag = "vehicles"
))]
pub async fn get_vehicle_by_id(
	State(state): State<AppState>,
	Path(vehicle_id): Path<i64>,
) -> Result<Json<VehicleResponse>, (StatusCode, Json<ErrorResponse>)> {
	let vehicle = state
		.vehicle_service
		.find_by_id(vehicle_id)
		.await
		.map_err(service_error)?;

	Ok(Json(VehicleResponse::from(&vehicle)))
}

/// POST /api/v1/vehicles - Create a vehicle (or update, when the body carries an id)
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/vehicles",
    request_body = VehicleRequest,
    responses(
        (status = 201, description = "Vehicle stored", body = VehicleResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Update target not found", body = ErrorResponse)
    ),
    tag = "vehicles"
))]
pub async fn post_vehicle(
	State(state): State<AppState>,
	Json(request): Json<VehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), (StatusCode, Json<ErrorResponse>)> {
	let vehicle = state
		.vehicle_service
		.save_vehicle(request)
		.await
		.map_err(service_error)?;

	Ok((StatusCode::CREATED, Json(VehicleResponse::from(&vehicle))))
}

/// PUT /api/v1/vehicles/{id} - Update a vehicle's details and location
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/api/v1/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle ID")),
    request_body = VehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "vehicles"
))]
pub async fn put_vehicle(
	State(state): State<AppState>,
	Path(vehicle_id): Path<i64>,
	Json(mut request): Json<VehicleRequest>,
) -> Result<Json<VehicleResponse>, (StatusCode, Json<ErrorResponse>)> {
	// Path id wins over any id in the body
	request.id = Some(vehicle_id);

	let vehicle = state
		.vehicle_service
		.save_vehicle(request)
		.await
		.map_err(service_error)?;

	Ok(Json(VehicleResponse::from(&vehicle)))
}

/// DELETE /api/v1/vehicles/{id} - Delete a vehicle
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "vehicles"
))]
pub async fn delete_vehicle(
	State(state): State<AppState>,
	Path(vehicle_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
	state
		.vehicle_service
		.delete_vehicle(vehicle_id)
		.await
		.map_err(service_error)?;

	Ok(StatusCode::NO_CONTENT)
}
