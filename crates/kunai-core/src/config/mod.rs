use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

use crate::constants::{LINE_BREAK, VCARD_VERSION_LATEST};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub writer: WriterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriterConfig {
    /// Version written for cards that do not name one.
    pub version: String,
    /// Reject envelope operations issued out of order.
    pub sequenced: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// ## Summary
/// Environment source for settings, keyed like `WRITER_VERSION`.
///
/// Values stay strings; `writer.version` must not be parsed as a number, and
/// `writer.sequenced` is converted to a bool on deserialization.
#[must_use]
pub fn environment() -> Environment {
    Environment::default()
        .convert_case(config::Case::Snake)
        .separator("_")
        .ignore_empty(true)
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(environment())
    }

    /// ## Summary
    /// Loads configuration from the given environment source and an optional `config.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(environment: Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("writer.version", VCARD_VERSION_LATEST)?
            .set_default("writer.sequenced", true)?
            .set_default("logging.level", "info")?
            .add_source(environment)
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks values the deserializer cannot reject on its own.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the default version could not
    /// be written as a single content line, or the logging level is empty.
    pub fn validate(&self) -> CoreResult<()> {
        let version = &self.writer.version;
        if version.is_empty()
            || version
                .chars()
                .any(|c| c.is_whitespace() || LINE_BREAK.contains(c))
        {
            return Err(CoreError::InvalidConfiguration(format!(
                "writer.version must be a non-empty token, got {version:?}"
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading, deserializing, or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    tracing::debug!(
        version = %settings.writer.version,
        sequenced = settings.writer.sequenced,
        "Writer configuration loaded"
    );

    Ok(settings)
}
