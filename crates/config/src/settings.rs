//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub server: ServerSettings,
	pub pricing: ClientSettings,
	pub maps: ClientSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Outbound service endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClientSettings {
	/// Base URL of the service
	pub endpoint: String,
	/// Request timeout for the HTTP client
	pub timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "0.0.0.0".to_string(),
				port: 8080,
			},
			pricing: ClientSettings {
				endpoint: "http://localhost:8082".to_string(),
				timeout_ms: 5000,
			},
			maps: ClientSettings {
				endpoint: "http://localhost:9191".to_string(),
				timeout_ms: 5000,
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_bind_address() {
		let settings = Settings::default();
		assert_eq!(settings.bind_address(), "0.0.0.0:8080");
	}

	#[test]
	fn defaults_point_at_local_stubs() {
		let settings = Settings::default();
		assert_eq!(settings.pricing.endpoint, "http://localhost:8082");
		assert_eq!(settings.maps.endpoint, "http://localhost:9191");
	}
}
