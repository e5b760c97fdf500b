use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub evaluation: EvaluationConfig,
    pub dnis: DnisConfig,
    pub logging: LoggingConfig,
}

/// Tunables of the schedule evaluation engine.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Whole years of slack added to the recurrence expansion horizon.
    pub slack_years: u32,
    /// Safety cap on expanded occurrences per schedule window.
    pub max_occurrences: u16,
}

/// DNIS normalization settings applied by catalog producers and callers.
#[derive(Debug, Clone, Deserialize)]
pub struct DnisConfig {
    /// Normalize dialed numbers to E.164 before matching.
    pub convert_to_e164: bool,
    /// Country code prepended during normalization, with or without `+`.
    pub country_code: String,
    /// National dialing prefix stripped before the country code is prepended.
    pub strip_national_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if a tunable is outside its supported range.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default(
                "evaluation.slack_years",
                i64::from(crate::constants::DEFAULT_SLACK_YEARS),
            )?
            .set_default(
                "evaluation.max_occurrences",
                i64::from(crate::constants::DEFAULT_MAX_OCCURRENCES),
            )?
            .set_default("dnis.convert_to_e164", false)?
            .set_default("dnis.country_code", "+1")?
            .set_default("dnis.strip_national_prefix", "0")?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Self>()?;

        if settings.evaluation.slack_years == 0 {
            return Err(CoreError::InvalidConfiguration(
                "evaluation.slack_years must be at least 1".to_string(),
            )
            .into());
        }
        if settings.evaluation.max_occurrences == 0 {
            return Err(CoreError::InvalidConfiguration(
                "evaluation.max_occurrences must be at least 1".to_string(),
            )
            .into());
        }

        tracing::debug!(
            slack_years = settings.evaluation.slack_years,
            max_occurrences = settings.evaluation.max_occurrences,
            "Evaluation settings loaded"
        );

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
