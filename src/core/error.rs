//! Evaluation error types.

use thiserror::Error;

/// Errors surfaced while evaluating a flow.
///
/// Sending an action the current state does not accept is deliberately *not*
/// an error; it is a silent no-op. The only failure mode is asking about a
/// state the flow does not define.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The supplied or current state is not a key of the flow.
    #[error("state '{state}' is not defined in the flow")]
    UnknownState { state: String },
}

impl FlowError {
    pub(crate) fn unknown_state(state: &str) -> Self {
        Self::UnknownState {
            state: state.to_string(),
        }
    }
}
