//! Service startup logging for the Vehicles API
//!
//! Logs service, environment and system information at startup so a boot
//! can be reconstructed from the log alone.

use std::env;
use tracing::info;

/// Logs comprehensive service information at startup
pub fn log_service_info() {
	// Use the root package name and version, not the current crate
	let service_name = "vehicles-server";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Vehicles API Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);

	// Log platform information
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	// Log current working directory
	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	// Log important environment variables if present
	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	// Log startup timestamp
	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);

	info!("🎯 Starting vehicles server initialization...");
}

/// Logs startup completion with the bound address
pub fn log_startup_complete(bind_address: &str) {
	info!("=== Vehicles API Service Ready ===");
	info!("✅ Listening on http://{}", bind_address);
}

/// Logs a clean shutdown
pub fn log_service_shutdown() {
	info!("=== Vehicles API Service Shutting Down ===");
	info!(
		"🕒 Stopped at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}
