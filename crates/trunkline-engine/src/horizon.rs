//! Evaluation horizon for recurring schedules.
//!
//! Schedule windows carry only their first occurrence's interval, so the
//! engine synthesizes a safe upper bound for recurrence expansion once per
//! catalog instead of re-querying the source on every evaluation.

use chrono::{DateTime, Datelike, Months, Utc};

use crate::model::{CallRoute, ScheduleCategoryGroup};

/// Horizon extension computed once per catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedRange {
    /// Whole years recurrence expansion may extend past a window's start.
    pub extension_years: u32,
    /// Absolute latest target instant the engine is willing to evaluate.
    /// Callers must reject later targets before resolving any route.
    pub horizon: DateTime<Utc>,
}

/// Adds whole years to an instant, saturating at the maximum representable
/// instant.
#[must_use]
pub fn add_years(instant: DateTime<Utc>, years: u32) -> DateTime<Utc> {
    instant
        .checked_add_months(Months::new(years * 12))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// ## Summary
/// Computes the horizon extension for a catalog.
///
/// With no schedule windows at all the extension is `slack_years` from `now`.
/// Otherwise it is the calendar-year spread of every window start across all
/// routes and categories plus `slack_years`, and the horizon is anchored at
/// the earliest start instant. Always produces a value.
///
/// `now` is a parameter rather than an ambient clock read so the computation
/// stays a pure function of its inputs.
#[must_use]
pub fn extended_range(
    catalog: &[CallRoute],
    now: DateTime<Utc>,
    slack_years: u32,
) -> ExtendedRange {
    let mut starts = catalog
        .iter()
        .filter_map(|route| route.schedule.as_ref())
        .flat_map(ScheduleCategoryGroup::window_starts);

    let Some(first) = starts.next() else {
        tracing::debug!(extension_years = slack_years, "No schedule windows in catalog");
        return ExtendedRange {
            extension_years: slack_years,
            horizon: add_years(now, slack_years),
        };
    };

    let mut min_start = first;
    let mut max_year = first.year();
    for start in starts {
        if start < min_start {
            min_start = start;
        }
        if start.year() > max_year {
            max_year = start.year();
        }
    }

    // The earliest instant necessarily carries the smallest calendar year.
    let spread = u32::try_from(max_year - min_start.year()).unwrap_or(0);
    let extension_years = spread + slack_years;
    let horizon = add_years(min_start, extension_years);

    tracing::debug!(extension_years, %horizon, "Computed evaluation horizon");

    ExtendedRange {
        extension_years,
        horizon,
    }
}
