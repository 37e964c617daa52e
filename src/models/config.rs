//! Configuration model loaded from external sources.

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings of the lead gateway client.
pub struct ClientConfig {
    /// Base URL of the server exposing `/leads`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Loads settings from `./config`, the `APP_ENV` profile and `APP_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Loads settings layered as: built-in defaults, `{dir}/default.*`,
    /// `{dir}/{APP_ENV}.*` (profile defaults to `local`), then `APP_*`
    /// environment variables. Every file is optional.
    pub fn load_from(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());
        Self::load_layered(config_dir.as_ref(), &app_env, app_environment())
    }

    fn load_layered(
        dir: &Path,
        profile: &str,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(profile).to_string_lossy()).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

fn app_environment() -> Environment {
    Environment::with_prefix("APP").try_parsing(true)
}
