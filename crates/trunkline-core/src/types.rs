use serde::{Deserialize, Serialize};

/// Schedule category without engine dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleCategory {
    Holiday,
    Closed,
    Open,
}

impl ScheduleCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Holiday => "holiday",
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

impl std::fmt::Display for ScheduleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
