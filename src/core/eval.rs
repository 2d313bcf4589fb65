//! Pure derivation functions over a flow.
//!
//! Everything here is a pure function of `(flow, state)`: derived sets are
//! recomputed on every call and nothing is cached or mutated. All returned
//! collections are ordered sets in first-occurrence order.

use super::error::FlowError;
use super::flow::{ActionName, Flow, StateName};

/// Remove duplicates from `items`, keeping first-occurrence order.
///
/// Flow tables are small, so a linear `contains` scan beats hashing here.
fn dedupe_ordered<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Actions accepted by `state`: the keys of its `on` mapping.
///
/// Errors with [`FlowError::UnknownState`] when `state` is not a flow key.
/// A defined state with an empty `on` mapping yields the empty set.
pub fn available_actions(flow: &Flow, state: &str) -> Result<Vec<ActionName>, FlowError> {
    let def = flow
        .get(state)
        .ok_or_else(|| FlowError::unknown_state(state))?;
    Ok(dedupe_ordered(def.on().actions().map(str::to_string)))
}

/// States reachable from `state` by one action: the values of its `on`
/// mapping, duplicates collapsed (two actions leading to the same state
/// produce a single entry).
pub fn available_states(flow: &Flow, state: &str) -> Result<Vec<StateName>, FlowError> {
    let def = flow
        .get(state)
        .ok_or_else(|| FlowError::unknown_state(state))?;
    Ok(dedupe_ordered(def.on().targets().map(str::to_string)))
}

/// Every state defined anywhere in the flow, in table order.
pub fn all_states(flow: &Flow) -> Vec<StateName> {
    dedupe_ordered(flow.state_names().map(str::to_string))
}

/// Every action accepted anywhere in the flow, deduplicated across the whole
/// table; order of first appearance scanning states in table order.
pub fn all_actions(flow: &Flow) -> Vec<ActionName> {
    dedupe_ordered(
        flow.iter()
            .flat_map(|(_, def)| def.on().actions())
            .map(str::to_string),
    )
}

/// Resolve an action against the current state.
///
/// Returns `Ok(Some(target))` when `state` accepts `action`, and `Ok(None)`
/// when it does not; an unaccepted action is tolerated, never an error. The
/// only error is `state` itself being absent from the flow.
pub fn resolve<'a>(flow: &'a Flow, state: &str, action: &str) -> Result<Option<&'a str>, FlowError> {
    let def = flow
        .get(state)
        .ok_or_else(|| FlowError::unknown_state(state))?;
    Ok(def.on().target(action))
}
