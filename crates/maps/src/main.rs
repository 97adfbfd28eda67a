//! Maps service stub server

use std::net::SocketAddr;

use maps_service::create_router;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	let port: u16 = std::env::var("MAPS_PORT")
		.ok()
		.and_then(|p| p.parse().ok())
		.unwrap_or(9191);
	let addr = SocketAddr::from(([0, 0, 0, 0], port));

	let listener = tokio::net::TcpListener::bind(addr).await?;
	info!("Maps service listening on http://{}", addr);
	info!("  GET /health");
	info!("  GET /maps?lat={{lat}}&lon={{lon}}");

	axum::serve(listener, create_router()).await?;
	Ok(())
}
