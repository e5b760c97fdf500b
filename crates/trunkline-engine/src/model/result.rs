use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final status of one route at the target instant. Exactly one applies per
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Route is configured open around the clock.
    OpenAlways,
    /// Target falls inside an active open window.
    Open,
    /// Target falls inside a holiday window.
    ClosedHoliday,
    /// Target falls inside a closed window.
    ClosedClosedSchedule,
    /// Open windows exist but none is active at the target.
    ClosedOpenSchedule,
    /// An enabled emergency override governs the route.
    Emergency,
    /// No route matched the selector filters.
    NotFound,
    /// A schedule group is configured but no category produced a verdict.
    Unclassified,
}

impl Status {
    /// Canonical human-readable name consumers render.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAlways => "Open (Always)",
            Self::Open => "Open",
            Self::ClosedHoliday => "Closed (Holiday Sched.)",
            Self::ClosedClosedSchedule => "Closed (Closed Sched.)",
            Self::ClosedOpenSchedule => "Closed (Open Sched.)",
            Self::Emergency => "Emergency",
            Self::NotFound => "Not Found",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a route carries an emergency override, and its switch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyState {
    Enabled,
    Disabled,
    NotApplicable,
}

impl EmergencyState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for EmergencyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluation outcome: one per matching route, or a single `NotFound`
/// sentinel when the selector filters matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Pipe-joined DNIS list of the route, or the DID filter for `NotFound`.
    pub did: Option<String>,
    pub route_name: Option<String>,
    /// Flow that would answer a call at the target instant.
    pub flow_name: Option<String>,
    /// Name of the schedule window (or override) that decided the status.
    pub schedule_name: Option<String>,
    pub emergency_state: EmergencyState,
    pub emergency_flow_name: Option<String>,
    pub target: DateTime<Utc>,
    pub status: Status,
}

impl EvaluationResult {
    /// Sentinel result for selector filters that matched no route. The
    /// supplied filter values are carried through so consumers can report
    /// what was asked for.
    #[must_use]
    pub fn not_found(
        target: DateTime<Utc>,
        did: Option<&str>,
        route_name: Option<&str>,
        flow_name: Option<&str>,
    ) -> Self {
        Self {
            did: did.map(String::from),
            route_name: route_name.map(String::from),
            flow_name: flow_name.map(String::from),
            schedule_name: None,
            emergency_state: EmergencyState::NotApplicable,
            emergency_flow_name: None,
            target,
            status: Status::NotFound,
        }
    }
}
