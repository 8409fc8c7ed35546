use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, Settings};

/// Loads the service settings from the environment.
///
/// In-code defaults are layered under the `DB_*` environment variables, so
/// a bare local checkout connects to a stock postgres instance while any
/// field can be overridden per deployment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("db.host", "127.0.0.1")?
        .set_default("db.port", 5432)?
        .set_default("db.user", "postgres")?
        .set_default("db.password", "postgres")?
        .set_default("db.name", "marketboard")?
        .add_source(
            config::Environment::default()
                .separator("_")
                .try_parsing(true),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    Ok(settings)
}
