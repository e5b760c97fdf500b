//! Route status resolution: the emergency, holiday, closed, open priority
//! chain.

use chrono::{DateTime, Utc};
use trunkline_core::types::ScheduleCategory;

use crate::category::resolve_category;
use crate::error::EngineResult;
use crate::model::{CallRoute, EmergencyState, Status};
use crate::recurrence::OccurrenceProvider;

/// Status decision for one route, before result assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteVerdict {
    pub status: Status,
    /// Flow that would answer a call, per the branch that decided the status.
    pub flow_name: Option<String>,
    /// Window or override name that decided the status.
    pub schedule_name: Option<String>,
    pub emergency_state: EmergencyState,
    pub emergency_flow_name: Option<String>,
}

const CATEGORY_ORDER: [ScheduleCategory; 3] = [
    ScheduleCategory::Holiday,
    ScheduleCategory::Closed,
    ScheduleCategory::Open,
];

/// ## Summary
/// Applies the fixed priority chain for one route: an enabled emergency
/// override wins outright, then `always_open`, then the holiday, closed, and
/// open categories in that order. A route whose schedule produces no verdict
/// in any category resolves to [`Status::Unclassified`].
///
/// Emergency metadata is attached to the verdict independent of which branch
/// decided the status; a disabled override does not short-circuit.
///
/// ## Errors
/// Propagates provider failures for malformed rules. No default status is
/// ever substituted for a route that fails to evaluate.
pub fn resolve_route(
    route: &CallRoute,
    target: DateTime<Utc>,
    extension_years: u32,
    provider: &impl OccurrenceProvider,
) -> EngineResult<RouteVerdict> {
    let emergency_state = route
        .emergency
        .as_ref()
        .map_or(EmergencyState::NotApplicable, |emergency| {
            if emergency.enabled {
                EmergencyState::Enabled
            } else {
                EmergencyState::Disabled
            }
        });
    let emergency_flow_name = route
        .emergency
        .as_ref()
        .map(|emergency| emergency.override_flow_name.clone());

    if let Some(emergency) = route.emergency.as_ref().filter(|emergency| emergency.enabled) {
        tracing::debug!(route = %route.name, override_name = %emergency.name, "Emergency override governs the route");
        return Ok(RouteVerdict {
            status: Status::Emergency,
            flow_name: Some(emergency.override_flow_name.clone()),
            schedule_name: Some(emergency.name.clone()),
            emergency_state,
            emergency_flow_name,
        });
    }

    if route.always_open {
        return Ok(RouteVerdict {
            status: Status::OpenAlways,
            flow_name: route.open_flow_name.clone(),
            schedule_name: None,
            emergency_state,
            emergency_flow_name,
        });
    }

    for category in CATEGORY_ORDER {
        let windows = route
            .schedule
            .as_ref()
            .map_or(&[][..], |group| group.windows(category));
        if let Some(verdict) = resolve_category(category, windows, target, extension_years, provider)? {
            let flow_name = match category {
                ScheduleCategory::Holiday => route.holiday_flow_name.clone(),
                ScheduleCategory::Closed => route.closed_flow_name.clone(),
                ScheduleCategory::Open => route.open_flow_name.clone(),
            };
            return Ok(RouteVerdict {
                status: verdict.status,
                flow_name,
                schedule_name: Some(verdict.schedule_name),
                emergency_state,
                emergency_flow_name,
            });
        }
    }

    tracing::warn!(route = %route.name, "No category produced a verdict for the route");
    Ok(RouteVerdict {
        status: Status::Unclassified,
        flow_name: None,
        schedule_name: None,
        emergency_state,
        emergency_flow_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmergencyOverride, ScheduleCategoryGroup, ScheduleWindow};
    use crate::recurrence::RRuleProvider;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn xmas_window() -> ScheduleWindow {
        ScheduleWindow::new(
            Uuid::new_v4(),
            "Xmas",
            Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 12, 25, 23, 59, 59).unwrap(),
            None,
        )
        .expect("valid window")
    }

    fn all_day_open_window() -> ScheduleWindow {
        ScheduleWindow::new(
            Uuid::new_v4(),
            "Every Day",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap(),
            Some("FREQ=DAILY".to_string()),
        )
        .expect("valid window")
    }

    fn base_route() -> CallRoute {
        CallRoute {
            id: Uuid::new_v4(),
            name: "Main Line".to_string(),
            dnis: vec!["+13175551234".to_string()],
            always_open: false,
            open_flow_name: Some("Daytime".to_string()),
            closed_flow_name: Some("Voicemail".to_string()),
            holiday_flow_name: Some("Holiday Greeting".to_string()),
            emergency: None,
            schedule: None,
        }
    }

    #[test]
    fn test_enabled_emergency_beats_everything() {
        let mut route = base_route();
        route.always_open = true;
        route.emergency = Some(EmergencyOverride {
            name: "Outage".to_string(),
            override_flow_name: "Outage IVR".to_string(),
            enabled: true,
        });

        let target = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let verdict = resolve_route(&route, target, 11, &RRuleProvider::default())
            .expect("resolution succeeds");

        assert_eq!(verdict.status, Status::Emergency);
        assert_eq!(verdict.flow_name.as_deref(), Some("Outage IVR"));
        assert_eq!(verdict.schedule_name.as_deref(), Some("Outage"));
        assert_eq!(verdict.emergency_state, EmergencyState::Enabled);
    }

    #[test]
    fn test_disabled_emergency_does_not_short_circuit() {
        let mut route = base_route();
        route.always_open = true;
        route.emergency = Some(EmergencyOverride {
            name: "Outage".to_string(),
            override_flow_name: "Outage IVR".to_string(),
            enabled: false,
        });

        let target = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let verdict = resolve_route(&route, target, 11, &RRuleProvider::default())
            .expect("resolution succeeds");

        assert_eq!(verdict.status, Status::OpenAlways);
        assert_eq!(verdict.flow_name.as_deref(), Some("Daytime"));
        assert_eq!(verdict.emergency_state, EmergencyState::Disabled);
        assert_eq!(verdict.emergency_flow_name.as_deref(), Some("Outage IVR"));
    }

    #[test]
    fn test_holiday_takes_precedence_over_open() {
        let mut route = base_route();
        route.schedule = Some(ScheduleCategoryGroup {
            holiday: vec![xmas_window()],
            closed: vec![],
            open: vec![all_day_open_window()],
        });

        let target = Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap();
        let verdict = resolve_route(&route, target, 11, &RRuleProvider::default())
            .expect("resolution succeeds");

        assert_eq!(verdict.status, Status::ClosedHoliday);
        assert_eq!(verdict.flow_name.as_deref(), Some("Holiday Greeting"));
        assert_eq!(verdict.schedule_name.as_deref(), Some("Xmas"));
        assert_eq!(verdict.emergency_state, EmergencyState::NotApplicable);
    }

    #[test]
    fn test_open_window_resolves_open() {
        let mut route = base_route();
        route.schedule = Some(ScheduleCategoryGroup {
            holiday: vec![xmas_window()],
            closed: vec![],
            open: vec![all_day_open_window()],
        });

        let target = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let verdict = resolve_route(&route, target, 11, &RRuleProvider::default())
            .expect("resolution succeeds");

        assert_eq!(verdict.status, Status::Open);
        assert_eq!(verdict.flow_name.as_deref(), Some("Daytime"));
        assert_eq!(verdict.schedule_name.as_deref(), Some("Every Day"));
    }

    #[test]
    fn test_no_verdict_resolves_unclassified() {
        let mut route = base_route();
        // One closed window that does not cover the target, no open windows.
        route.schedule = Some(ScheduleCategoryGroup {
            holiday: vec![],
            closed: vec![xmas_window()],
            open: vec![],
        });

        let target = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let verdict = resolve_route(&route, target, 11, &RRuleProvider::default())
            .expect("resolution succeeds");

        assert_eq!(verdict.status, Status::Unclassified);
        assert!(verdict.flow_name.is_none());
        assert!(verdict.schedule_name.is_none());
    }
}
