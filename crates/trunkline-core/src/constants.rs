/// Evaluation constants shared across crates.
///
/// Slack added on top of the year spread of configured schedule windows when
/// computing the recurrence expansion horizon. Generous on purpose: the
/// horizon must tolerate multi-year gaps between the earliest and latest
/// configured windows.
pub const DEFAULT_SLACK_YEARS: u32 = 11;

/// Safety cap on expanded occurrences per schedule window.
pub const DEFAULT_MAX_OCCURRENCES: u16 = 10_000;
