//! Build errors for the flow builder.

use thiserror::Error;

/// Errors that can occur when building a machine from a flow description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("flow defines no states. Add at least one state")]
    EmptyFlow,

    #[error("initial state '{state}' is not defined in the flow")]
    UndefinedInitialState { state: String },
}
