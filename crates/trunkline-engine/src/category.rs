//! Per-category schedule resolution.

use chrono::{DateTime, Utc};
use trunkline_core::types::ScheduleCategory;

use crate::error::EngineResult;
use crate::matcher::{is_within_one_time, is_within_recurring};
use crate::model::{ScheduleWindow, Status};
use crate::recurrence::OccurrenceProvider;

/// Verdict of one category for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryVerdict {
    pub status: Status,
    /// Name of the window that decided the verdict.
    pub schedule_name: String,
}

fn window_matches(
    window: &ScheduleWindow,
    target: DateTime<Utc>,
    extension_years: u32,
    provider: &impl OccurrenceProvider,
) -> EngineResult<bool> {
    if window.is_recurring() {
        is_within_recurring(window, target, extension_years, provider)
    } else {
        Ok(is_within_one_time(window, target))
    }
}

fn first_match(
    windows: &[ScheduleWindow],
    target: DateTime<Utc>,
    extension_years: u32,
    provider: &impl OccurrenceProvider,
    status: Status,
) -> EngineResult<Option<CategoryVerdict>> {
    for window in windows {
        if window_matches(window, target, extension_years, provider)? {
            tracing::debug!(window = %window.name, status = %status, "Category window matched");
            return Ok(Some(CategoryVerdict {
                status,
                schedule_name: window.name.clone(),
            }));
        }
    }
    Ok(None)
}

/// The open category must distinguish "inside an active open window" from
/// "open windows are configured but none is active" -- an effective closure.
/// A rule-carrying window that does not match leaves a tentative
/// `ClosedOpenSchedule` verdict; a later window can still win with a positive
/// match, which stops the scan immediately.
fn resolve_open(
    windows: &[ScheduleWindow],
    target: DateTime<Utc>,
    extension_years: u32,
    provider: &impl OccurrenceProvider,
) -> EngineResult<Option<CategoryVerdict>> {
    let mut fallback = None;
    for window in windows {
        if window.is_recurring() {
            if is_within_recurring(window, target, extension_years, provider)? {
                return Ok(Some(CategoryVerdict {
                    status: Status::Open,
                    schedule_name: window.name.clone(),
                }));
            }
            fallback = Some(CategoryVerdict {
                status: Status::ClosedOpenSchedule,
                schedule_name: window.name.clone(),
            });
        } else if is_within_one_time(window, target) {
            return Ok(Some(CategoryVerdict {
                status: Status::Open,
                schedule_name: window.name.clone(),
            }));
        }
    }
    Ok(fallback)
}

/// ## Summary
/// Evaluates one category's windows in stored order and returns its verdict,
/// if any.
///
/// Holiday and closed categories stop at the first matching window and no
/// match means no verdict. The open category additionally retains a fallback
/// for non-matching rule-carrying windows (see [`resolve_open`]).
///
/// ## Errors
/// Propagates provider failures for malformed rules.
pub fn resolve_category(
    category: ScheduleCategory,
    windows: &[ScheduleWindow],
    target: DateTime<Utc>,
    extension_years: u32,
    provider: &impl OccurrenceProvider,
) -> EngineResult<Option<CategoryVerdict>> {
    match category {
        ScheduleCategory::Holiday => first_match(
            windows,
            target,
            extension_years,
            provider,
            Status::ClosedHoliday,
        ),
        ScheduleCategory::Closed => first_match(
            windows,
            target,
            extension_years,
            provider,
            Status::ClosedClosedSchedule,
        ),
        ScheduleCategory::Open => resolve_open(windows, target, extension_years, provider),
    }
}
