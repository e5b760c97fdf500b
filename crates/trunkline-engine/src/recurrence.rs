//! Recurrence occurrence expansion behind the provider boundary.
//!
//! The engine never interprets recurrence-rule grammar itself; it asks an
//! [`OccurrenceProvider`] for the concrete occurrence intervals of a window
//! inside an expansion range. The shipped provider is backed by the `rrule`
//! crate.

use chrono::{DateTime, Utc};
use rrule::{RRule, Tz, Unvalidated};

use crate::error::{EngineError, EngineResult};
use crate::model::ScheduleWindow;

/// One concrete instantiation of a recurring window's interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Occurrence start, UTC.
    pub start: DateTime<Utc>,
    /// Occurrence end, UTC.
    pub end: DateTime<Utc>,
}

/// Source of occurrence intervals for recurring windows.
///
/// Implementations must return a finite, chronologically ordered sequence,
/// empty when the rule yields nothing in range, and must be deterministic
/// for identical inputs.
pub trait OccurrenceProvider {
    /// Occurrences of `window` whose starts fall in `[lower, upper]`, both
    /// bounds inclusive.
    ///
    /// ## Errors
    /// Fails when the window's rule text is rejected by the rule evaluator.
    fn occurrences_between(
        &self,
        window: &ScheduleWindow,
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    ) -> EngineResult<Vec<Occurrence>>;
}

/// Occurrence provider backed by the `rrule` crate.
///
/// Builds a rule set from the window's rule text anchored at the window
/// start, expands it inside the requested range, and gives every occurrence
/// the span of the window's first interval.
#[derive(Debug, Clone, Copy)]
pub struct RRuleProvider {
    max_occurrences: u16,
}

impl RRuleProvider {
    #[must_use]
    pub const fn new(max_occurrences: u16) -> Self {
        Self { max_occurrences }
    }
}

impl Default for RRuleProvider {
    fn default() -> Self {
        Self::new(trunkline_core::constants::DEFAULT_MAX_OCCURRENCES)
    }
}

impl OccurrenceProvider for RRuleProvider {
    fn occurrences_between(
        &self,
        window: &ScheduleWindow,
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    ) -> EngineResult<Vec<Occurrence>> {
        let Some(rule_text) = window.rule.as_deref() else {
            return Ok(Vec::new());
        };

        let rrule = rule_text
            .parse::<RRule<Unvalidated>>()
            .map_err(|err| EngineError::InvalidRule(err.to_string()))?;
        let dt_start = window.start.with_timezone(&Tz::UTC);
        let rrule_set = rrule
            .build(dt_start)
            .map_err(|err| EngineError::InvalidRule(err.to_string()))?;

        let starts = rrule_set
            .after(lower.with_timezone(&Tz::UTC))
            .before(upper.with_timezone(&Tz::UTC))
            .all(self.max_occurrences)
            .dates;

        tracing::trace!(
            window = %window.name,
            count = starts.len(),
            "Expanded recurrence rule"
        );

        let span = window.span();
        Ok(starts
            .into_iter()
            .map(|start| {
                let start = start.with_timezone(&Utc);
                Occurrence {
                    start,
                    end: start + span,
                }
            })
            .collect())
    }
}
