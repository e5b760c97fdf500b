use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trunkline_core::types::ScheduleCategory;
use uuid::Uuid;

use super::window::ScheduleWindow;

/// Emergency override attached to a route. At most one per route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyOverride {
    pub name: String,
    /// Flow that answers calls while the override is enabled.
    pub override_flow_name: String,
    pub enabled: bool,
}

/// The three schedule categories of one route.
///
/// Window order within each list is evaluation priority (first match wins)
/// and must preserve the order of the upstream data source. The engine never
/// re-sorts; catalog producers are responsible for a stable,
/// source-preserving order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleCategoryGroup {
    pub holiday: Vec<ScheduleWindow>,
    pub closed: Vec<ScheduleWindow>,
    pub open: Vec<ScheduleWindow>,
}

impl ScheduleCategoryGroup {
    /// Windows of one category, in evaluation order.
    #[must_use]
    pub fn windows(&self, category: ScheduleCategory) -> &[ScheduleWindow] {
        match category {
            ScheduleCategory::Holiday => &self.holiday,
            ScheduleCategory::Closed => &self.closed,
            ScheduleCategory::Open => &self.open,
        }
    }

    /// Start instants of every window across all three categories.
    pub fn window_starts(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.holiday
            .iter()
            .chain(&self.closed)
            .chain(&self.open)
            .map(|window| window.start)
    }
}

/// A configured call-handling unit with its phone numbers and flow bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRoute {
    /// Upstream identifier of the route.
    pub id: Uuid,
    pub name: String,
    /// Dialed numbers that reach this route.
    pub dnis: Vec<String>,
    /// Route is open around the clock; `schedule` is ignored when set.
    pub always_open: bool,
    pub open_flow_name: Option<String>,
    pub closed_flow_name: Option<String>,
    pub holiday_flow_name: Option<String>,
    pub emergency: Option<EmergencyOverride>,
    pub schedule: Option<ScheduleCategoryGroup>,
}

impl CallRoute {
    /// True if `flow_name` matches any of the route's open, closed, holiday,
    /// or emergency flow bindings.
    #[must_use]
    pub fn has_flow_name(&self, flow_name: &str) -> bool {
        [
            self.open_flow_name.as_deref(),
            self.closed_flow_name.as_deref(),
            self.holiday_flow_name.as_deref(),
            self.emergency
                .as_ref()
                .map(|emergency| emergency.override_flow_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|name| name == flow_name)
    }

    /// DNIS list the way results report it: a single number as-is, several
    /// numbers pipe-joined.
    #[must_use]
    pub fn joined_dnis(&self) -> String {
        self.dnis.join("|")
    }
}
