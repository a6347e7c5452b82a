use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Photo type used when `set_photo` is called without one.
pub const DEFAULT_PHOTO_TYPE: &str = "JPEG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub builder: BuilderSettings,
}

/// How setters treat empty-string inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyValuePolicy {
    /// `None` and `""` are both absent; the setter does nothing.
    #[default]
    Skip,
    /// Only `None` is absent; empty strings are written.
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuilderSettings {
    #[serde(default)]
    pub empty_values: EmptyValuePolicy,
    #[serde(default = "default_photo_type")]
    pub default_photo_type: String,
}

fn default_photo_type() -> String {
    DEFAULT_PHOTO_TYPE.to_string()
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            empty_values: EmptyValuePolicy::default(),
            default_photo_type: default_photo_type(),
        }
    }
}

impl BuilderSettings {
    /// ## Summary
    /// Returns the input if it counts as present under the configured policy.
    #[must_use]
    pub fn present<'a>(&self, value: Option<&'a str>) -> Option<&'a str> {
        match self.empty_values {
            EmptyValuePolicy::Skip => value.filter(|v| !v.is_empty()),
            EmptyValuePolicy::Keep => value,
        }
    }

    /// ## Summary
    /// Checks that the settings cannot produce a line the parser would split differently.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the default photo type is empty
    /// or contains a colon or line break.
    pub fn validate(&self) -> CoreResult<()> {
        if self.default_photo_type.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "builder.default_photo_type must not be empty".to_string(),
            ));
        }

        if self.default_photo_type.contains([':', '\r', '\n']) {
            return Err(CoreError::InvalidConfiguration(format!(
                "builder.default_photo_type contains a line delimiter: {:?}",
                self.default_photo_type
            )));
        }

        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `vcardkit.toml`.
    /// The TOML file takes precedence over environment values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("builder.empty_values", "skip")?
            .set_default("builder.default_photo_type", DEFAULT_PHOTO_TYPE)?
            .add_source(
                config::Environment::with_prefix("VCARDKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .add_source(config::File::with_name("vcardkit.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.builder.validate()?;

        tracing::debug!(settings = ?settings, "vcardkit configuration loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
