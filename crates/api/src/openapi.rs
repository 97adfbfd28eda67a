use crate::handlers::common::ErrorResponse;
use crate::handlers::{health, vehicles};
use utoipa::OpenApi;

use vehicles_types::vehicles::request::VehicleRequest;
use vehicles_types::vehicles::response::{VehicleResponse, VehiclesResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::ready,
        vehicles::get_vehicles,
        vehicles::get_vehicle_by_id,
        vehicles::post_vehicle,
        vehicles::put_vehicle,
        vehicles::delete_vehicle,
    ),
    components(schemas(VehicleRequest, VehicleResponse, VehiclesResponse, ErrorResponse)),
    tags(
        (name = "vehicles", description = "Vehicle CRUD and enrichment endpoints"),
        (name = "health", description = "Health and readiness endpoints")
    )
)]
pub struct ApiDoc;
