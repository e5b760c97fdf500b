use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use trunkline_core::error::{CoreError, CoreResult};
use uuid::Uuid;

/// A named time interval, one-time or recurring.
///
/// `start` and `end` delimit the first (or only) occurrence. A window that
/// carries a recurrence rule repeats that interval according to the rule;
/// the rule text is opaque to the engine and interpreted by the occurrence
/// provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWindow {
    /// Upstream identifier of the window.
    pub id: Uuid,
    pub name: String,
    /// Start of the first occurrence, UTC.
    pub start: DateTime<Utc>,
    /// End of the first occurrence, UTC. Never earlier than `start`.
    pub end: DateTime<Utc>,
    /// RFC 5545 RRULE text if the window repeats.
    pub rule: Option<String>,
}

impl ScheduleWindow {
    /// Creates a window, enforcing `start <= end`.
    ///
    /// ## Errors
    /// Returns a validation error when `end` precedes `start`.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        rule: Option<String>,
    ) -> CoreResult<Self> {
        if end < start {
            return Err(CoreError::ValidationError(format!(
                "schedule window end {end} precedes start {start}"
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
            rule,
        })
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.rule.is_some()
    }

    /// Length of one occurrence.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }
}
