//! Occurrence matching: one schedule window against one target instant.

use chrono::{DateTime, Utc};

use crate::error::EngineResult;
use crate::horizon::add_years;
use crate::model::ScheduleWindow;
use crate::recurrence::OccurrenceProvider;

/// True if `target` lies inside the window's single interval, boundaries
/// inclusive on both ends.
#[must_use]
pub fn is_within_one_time(window: &ScheduleWindow, target: DateTime<Utc>) -> bool {
    target >= window.start && target <= window.end
}

/// ## Summary
/// Decides whether `target` falls inside an occurrence of a recurring window.
///
/// A target earlier than the window start can belong to no occurrence and is
/// rejected without consulting the provider, as is a window with no rule
/// attached (route those through [`is_within_one_time`]). Otherwise
/// occurrences are expanded from the window start up to an extended boundary:
/// `extension_years` past the start once the target is at or beyond the first
/// occurrence's end, the start itself while the target still falls inside the
/// first occurrence's span.
///
/// Matching is two-pass: a coarse calendar-date filter picks the first
/// occurrence whose date range covers the target's date, then the exact
/// instants confirm the match. Collapsing the passes changes the semantics at
/// window boundaries; both are kept deliberately.
///
/// ## Errors
/// Propagates provider failures for malformed rules. "No occurrence found"
/// is a normal negative result, not an error.
pub fn is_within_recurring(
    window: &ScheduleWindow,
    target: DateTime<Utc>,
    extension_years: u32,
    provider: &impl OccurrenceProvider,
) -> EngineResult<bool> {
    let within_first = target >= window.start && target <= window.end;
    let past_first = target >= window.start && target >= window.end;

    if !within_first && !past_first {
        tracing::trace!(window = %window.name, %target, "Target precedes the window start");
        return Ok(false);
    }

    if window.rule.is_none() {
        return Ok(false);
    }

    let boundary = if past_first {
        add_years(window.start, extension_years)
    } else {
        window.start
    };

    let occurrences = provider.occurrences_between(window, window.start, boundary)?;

    let target_date = target.date_naive();
    let candidate = occurrences.iter().find(|occurrence| {
        occurrence.start.date_naive() <= target_date && occurrence.end.date_naive() >= target_date
    });

    let Some(occurrence) = candidate else {
        tracing::trace!(window = %window.name, %target, "No occurrence covers the target date");
        return Ok(false);
    };

    Ok(occurrence.start <= target && occurrence.end >= target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::{Occurrence, RRuleProvider};
    use chrono::TimeZone;
    use uuid::Uuid;

    /// Provider that fails the test if the matcher consults it.
    struct NeverConsulted;

    impl OccurrenceProvider for NeverConsulted {
        fn occurrences_between(
            &self,
            _window: &ScheduleWindow,
            _lower: DateTime<Utc>,
            _upper: DateTime<Utc>,
        ) -> EngineResult<Vec<Occurrence>> {
            panic!("provider must not be consulted");
        }
    }

    fn window(rule: Option<&str>) -> ScheduleWindow {
        ScheduleWindow::new(
            Uuid::new_v4(),
            "Business Hours",
            Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap(),
            rule.map(String::from),
        )
        .expect("valid window")
    }

    #[test]
    fn test_one_time_boundaries_inclusive() {
        let window = window(None);
        assert!(is_within_one_time(&window, window.start));
        assert!(is_within_one_time(&window, window.end));
        assert!(is_within_one_time(
            &window,
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
        ));
    }

    #[test]
    fn test_one_time_outside() {
        let window = window(None);
        assert!(!is_within_one_time(
            &window,
            Utc.with_ymd_and_hms(2024, 1, 1, 7, 59, 59).unwrap()
        ));
        assert!(!is_within_one_time(
            &window,
            Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 1).unwrap()
        ));
    }

    #[test]
    fn test_recurring_target_before_start_skips_provider() {
        let window = window(Some("FREQ=DAILY"));
        let target = Utc.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap();

        let matched = is_within_recurring(&window, target, 11, &NeverConsulted)
            .expect("pre-check rejects without expansion");
        assert!(!matched);
    }

    #[test]
    fn test_ruleless_window_never_matches_recurring() {
        let window = window(None);
        let target = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

        let matched = is_within_recurring(&window, target, 11, &NeverConsulted)
            .expect("rule-less windows are rejected without expansion");
        assert!(!matched);
    }

    #[test]
    fn test_daily_rule_matches_later_occurrence() {
        let window = window(Some("FREQ=DAILY"));
        let target = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();

        let matched = is_within_recurring(&window, target, 11, &RRuleProvider::default())
            .expect("expansion succeeds");
        assert!(matched);
    }

    #[test]
    fn test_daily_rule_rejects_time_outside_occurrence() {
        let window = window(Some("FREQ=DAILY"));
        let target = Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap();

        let matched = is_within_recurring(&window, target, 11, &RRuleProvider::default())
            .expect("expansion succeeds");
        assert!(!matched);
    }

    #[test]
    fn test_weekday_rule_rejects_weekend() {
        // 2024-01-01 is a Monday; the rule covers Monday through Friday.
        let window = window(Some("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR"));
        // 2024-06-15 is a Saturday.
        let target = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();

        let matched = is_within_recurring(&window, target, 11, &RRuleProvider::default())
            .expect("expansion succeeds");
        assert!(!matched);
    }

    #[test]
    fn test_target_inside_first_occurrence() {
        let window = window(Some("FREQ=DAILY"));
        let target = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();

        let matched = is_within_recurring(&window, target, 11, &RRuleProvider::default())
            .expect("expansion succeeds");
        assert!(matched);
    }
}
