//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the config file with environment overrides
///
/// Reads `config/config.{toml,yaml,json}` when present; any value can be
/// overridden with `VEHICLES_`-prefixed environment variables, e.g.
/// `VEHICLES_PRICING__ENDPOINT`.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("VEHICLES").separator("__"))
		.build()?;

	s.try_deserialize()
}
