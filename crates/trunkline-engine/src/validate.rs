//! Validation orchestration across the route catalog.

use chrono::{DateTime, Utc};

use crate::error::{EngineError, EngineResult};
use crate::horizon::ExtendedRange;
use crate::model::{CallRoute, EvaluationResult};
use crate::recurrence::OccurrenceProvider;
use crate::resolve::resolve_route;

/// Optional selectors narrowing a validation run to matching routes. All
/// unset selectors pass every route; set selectors combine with AND.
#[derive(Debug, Clone, Default)]
pub struct RouteSelector {
    /// Dialed number; selects routes whose DNIS set contains it.
    pub did: Option<String>,
    /// Exact route name.
    pub route_name: Option<String>,
    /// Flow name; selects routes with that name among their open, closed,
    /// holiday, or emergency flow bindings.
    pub flow_name: Option<String>,
}

impl RouteSelector {
    fn selects(&self, route: &CallRoute) -> bool {
        self.did
            .as_deref()
            .is_none_or(|did| route.dnis.iter().any(|dnis| dnis == did))
            && self
                .route_name
                .as_deref()
                .is_none_or(|name| route.name == name)
            && self
                .flow_name
                .as_deref()
                .is_none_or(|name| route.has_flow_name(name))
    }
}

/// One batch query: a target instant plus selector filters.
#[derive(Debug, Clone)]
pub struct ValidationQuery {
    pub target: DateTime<Utc>,
    pub selector: RouteSelector,
}

/// ## Summary
/// Evaluates every route the selector matches at `target` and assembles the
/// result set in catalog order. A selector that matches nothing yields a
/// single `NotFound` result carrying the filter values through.
///
/// The caller supplies the catalog's [`ExtendedRange`] (computed once via
/// [`crate::horizon::extended_range`]); the catalog must not be mutated while
/// a run is in flight.
///
/// ## Errors
/// - [`EngineError::BeyondHorizon`] when `target` is later than the computed
///   horizon; nothing is evaluated.
/// - Provider failures for malformed rules fail the run; no default status
///   is substituted for the offending route.
pub fn validate(
    catalog: &[CallRoute],
    target: DateTime<Utc>,
    range: &ExtendedRange,
    selector: &RouteSelector,
    provider: &impl OccurrenceProvider,
) -> EngineResult<Vec<EvaluationResult>> {
    if target > range.horizon {
        return Err(EngineError::BeyondHorizon {
            target,
            horizon: range.horizon,
        });
    }

    let selected: Vec<&CallRoute> = catalog
        .iter()
        .filter(|route| selector.selects(route))
        .collect();

    tracing::debug!(selected = selected.len(), %target, "Validating catalog");

    if selected.is_empty() {
        return Ok(vec![EvaluationResult::not_found(
            target,
            selector.did.as_deref(),
            selector.route_name.as_deref(),
            selector.flow_name.as_deref(),
        )]);
    }

    let mut results = Vec::with_capacity(selected.len());
    for route in selected {
        let verdict = resolve_route(route, target, range.extension_years, provider)?;
        results.push(EvaluationResult {
            did: Some(route.joined_dnis()),
            route_name: Some(route.name.clone()),
            flow_name: verdict.flow_name,
            schedule_name: verdict.schedule_name,
            emergency_state: verdict.emergency_state,
            emergency_flow_name: verdict.emergency_flow_name,
            target,
            status: verdict.status,
        });
    }

    Ok(results)
}

/// Evaluates a batch of queries in order and flattens the per-query result
/// sets into one sequence.
///
/// ## Errors
/// Fails on the first query that fails; earlier results are discarded so a
/// batch either evaluates completely or not at all.
pub fn validate_batch(
    catalog: &[CallRoute],
    queries: &[ValidationQuery],
    range: &ExtendedRange,
    provider: &impl OccurrenceProvider,
) -> EngineResult<Vec<EvaluationResult>> {
    let mut results = Vec::new();
    for query in queries {
        results.extend(validate(
            catalog,
            query.target,
            range,
            &query.selector,
            provider,
        )?);
    }
    Ok(results)
}
