//! Schedule evaluation engine for telephony call routing.
//!
//! Given a catalog of call routes carrying holiday/closed/open schedule
//! windows and optional emergency overrides, the engine resolves each route
//! to a single status at a target instant. Recurrence-rule semantics are
//! delegated to the `rrule` crate behind the [`recurrence::OccurrenceProvider`]
//! boundary; the engine itself is a pure function of its inputs and performs
//! no I/O.

pub mod category;
pub mod error;
pub mod horizon;
pub mod matcher;
pub mod model;
pub mod recurrence;
pub mod resolve;
pub mod validate;
