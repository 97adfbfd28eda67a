pub mod common;
pub mod health;
pub mod vehicles;

pub use health::{health, ready};
pub use vehicles::{
	delete_vehicle, get_vehicle_by_id, get_vehicles, post_vehicle, put_vehicle,
};
