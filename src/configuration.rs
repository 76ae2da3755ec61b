use crate::domain::{Normalizer, RangeBound};
use std::path::Path;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub normalization: NormalizationSettings,
}

/// How raw postal code input is cleaned up before it is matched.
#[derive(serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NormalizationSettings {
    /// Characters removed from the input on top of whitespace.
    #[serde(default = "default_normalization_settings_separators")]
    pub separators: String,
    /// Whether short codes are completed to the start or the end of their range.
    #[serde(default)]
    pub range_bound: RangeBound,
}

fn default_normalization_settings_separators() -> String {
    Normalizer::DEFAULT_SEPARATORS.to_string()
}

impl Default for NormalizationSettings {
    fn default() -> Self {
        Self {
            separators: default_normalization_settings_separators(),
            range_bound: RangeBound::default(),
        }
    }
}

impl NormalizationSettings {
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(&self.separators)
    }
}

/// The runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}
impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment.\
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    get_configuration_from(&base_path.join("configuration"), environment)
}

/// Read `base.yaml` and the environment file from `configuration_directory`,
/// then apply `APP_*` environment variable overrides.
pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
