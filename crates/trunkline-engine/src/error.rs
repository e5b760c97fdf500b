use chrono::{DateTime, Utc};
use thiserror::Error;

/// Engine errors - evaluation failures surfaced to callers
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    CoreError(#[from] trunkline_core::error::CoreError),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("target {target} is beyond the supported horizon {horizon}")]
    BeyondHorizon {
        target: DateTime<Utc>,
        horizon: DateTime<Utc>,
    },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
