//! Builder API for ergonomic machine construction.
//!
//! The builder validates what [`crate::Machine::new`] deliberately does not:
//! that the flow is non-empty and that the initial state is actually one of
//! its keys.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{ActionName, Flow, StateDef, StateName};
use crate::machine::{LocalCell, Machine};

/// Fluent builder for a [`Machine`] over an in-memory cell.
///
/// # Example
///
/// ```rust
/// use stateflow::FlowBuilder;
///
/// let mut machine = FlowBuilder::new()
///     .initial("idle")
///     .on("idle", "start", "running")
///     .on("running", "pause", "paused")
///     .on("running", "stop", "idle")
///     .on("paused", "resume", "running")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.transition("start").unwrap(), "running");
/// ```
#[derive(Default)]
pub struct FlowBuilder {
    initial: Option<StateName>,
    flow: Flow,
}

impl FlowBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with an explicit definition. Useful for states that
    /// accept no actions, which would otherwise never appear as a key.
    pub fn state(mut self, name: impl Into<StateName>, def: StateDef) -> Self {
        self.flow.insert(name, def);
        self
    }

    /// Declare that `state` accepts `action`, leading to `target`. The state
    /// entry is created on first mention; `target` is not required to be
    /// declared (arriving in an undeclared state surfaces as an evaluation
    /// error, matching the flow's lazy validation contract).
    pub fn on(
        mut self,
        state: impl Into<StateName>,
        action: impl Into<ActionName>,
        target: impl Into<StateName>,
    ) -> Self {
        let state = state.into();
        let mut def = self.flow.get(&state).cloned().unwrap_or_default();
        def.add(action, target);
        self.flow.insert(state, def);
        self
    }

    /// Build the machine.
    pub fn build(self) -> Result<Machine<LocalCell>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.flow.is_empty() {
            return Err(BuildError::EmptyFlow);
        }
        if !self.flow.contains(&initial) {
            return Err(BuildError::UndefinedInitialState { state: initial });
        }

        Ok(Machine::new(initial, self.flow))
    }
}
