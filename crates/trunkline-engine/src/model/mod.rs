//! Data model for call-routing evaluation.
//!
//! Constructed once per validation run from externally fetched data,
//! read-only during evaluation, discarded at the end of the run.

pub mod result;
pub mod route;
pub mod window;

pub use result::{EmergencyState, EvaluationResult, Status};
pub use route::{CallRoute, EmergencyOverride, ScheduleCategoryGroup};
pub use window::ScheduleWindow;
