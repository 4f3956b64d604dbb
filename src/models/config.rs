//! Configuration model loaded from external sources.

use config::Config;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
}

impl ServerConfig {
    /// Loads the configuration from an optional `config` file and the
    /// environment, with sensible defaults for local runs.
    pub fn load() -> Result<Self, config::ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("database_url", "advocates.db")?
            .set_default("templates_dir", "templates/**/*.html")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
