// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::DatabaseSettings;

/// Loads the database settings from the environment.
///
/// This function is the primary entry point for this crate. A local `.env`
/// file is loaded first (if present), then every `PETDB_`-prefixed variable
/// is deserialized into our strongly-typed `DatabaseSettings` struct.
pub fn load_settings() -> Result<DatabaseSettings, ConfigError> {
    // A missing .env file is fine; the variables may already be exported.
    dotenvy::dotenv().ok();

    let builder = config::Config::builder()
        .add_source(config::Environment::with_prefix("PETDB").try_parsing(true))
        .build()?;

    // Attempt to deserialize the environment into our `DatabaseSettings` struct.
    let settings = builder.try_deserialize::<DatabaseSettings>()?;
    settings.validate()?;

    Ok(settings)
}
