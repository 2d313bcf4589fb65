//! The machine: an imperative shell around the pure evaluation core.
//!
//! A [`Machine`] owns a flow table and a [`StateCell`], performs transitions,
//! keeps an immutable [`TransitionLog`] of actual state changes, and exposes
//! point-in-time snapshots via [`Machine::view`]. State changes are reported
//! through an injectable observer and through `tracing`; neither affects
//! control flow.

mod cell;

pub use cell::{LocalCell, StateCell};

use tracing::debug;

use crate::core::eval;
use crate::core::{ActionName, Flow, FlowError, StateName, TransitionLog, TransitionRecord};

/// Callback invoked with `(previous, next)` after each actual state change.
pub type Observer = Box<dyn Fn(&str, &str)>;

/// The `all` and `available` state sets of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSets {
    /// Every state defined in the flow, in table order.
    pub all: Vec<StateName>,
    /// States reachable from the current state by one action.
    pub available: Vec<StateName>,
}

/// The `all` and `available` action sets of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSets {
    /// Every action accepted anywhere in the flow.
    pub all: Vec<ActionName>,
    /// Actions the current state accepts.
    pub available: Vec<ActionName>,
}

/// Point-in-time snapshot of a machine.
///
/// All sets are derived fresh from `(state, flow)` when the snapshot is
/// taken; a snapshot never goes stale silently, it is simply replaced by
/// taking another one after a transition.
#[derive(Clone, Debug)]
pub struct FlowView<'a> {
    /// The currently active state.
    pub state: StateName,
    /// The flow the machine evaluates, unchanged.
    pub flow: &'a Flow,
    pub states: StateSets,
    pub actions: ActionSets,
}

/// A flow evaluator bound to a state cell.
///
/// The flow is immutable for the machine's lifetime; the active state lives
/// in the cell and is written only by [`Machine::transition`]. Everything
/// else is derived on demand.
///
/// # Example
///
/// ```rust
/// use stateflow::{Machine, flow};
///
/// let mut machine = Machine::new(
///     "idle",
///     flow! {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle" },
///     },
/// );
///
/// assert_eq!(machine.transition("start").unwrap(), "running");
/// assert_eq!(machine.state(), "running");
///
/// // An action the current state does not accept is a no-op.
/// assert_eq!(machine.transition("start").unwrap(), "running");
/// ```
pub struct Machine<C: StateCell = LocalCell> {
    flow: Flow,
    cell: C,
    log: TransitionLog,
    observer: Option<Observer>,
}

impl Machine<LocalCell> {
    /// Create a machine over an in-memory cell.
    ///
    /// The initial state is taken as given; an initial state missing from
    /// the flow surfaces as [`FlowError::UnknownState`] on the first
    /// evaluation rather than here.
    pub fn new(initial: impl Into<StateName>, flow: Flow) -> Self {
        Self::with_cell(LocalCell::new(initial), flow)
    }
}

impl<C: StateCell> Machine<C> {
    /// Create a machine over a host-supplied cell.
    pub fn with_cell(cell: C, flow: Flow) -> Self {
        Self {
            flow,
            cell,
            log: TransitionLog::new(),
            observer: None,
        }
    }

    /// Install an observer called with `(previous, next)` on each actual
    /// state change.
    pub fn observe(mut self, observer: impl Fn(&str, &str) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The currently active state, read from the cell.
    pub fn state(&self) -> StateName {
        self.cell.read()
    }

    /// The flow this machine evaluates.
    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    /// The log of actual state changes so far.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Take a snapshot of the machine: current state, the flow, and the
    /// four derived sets.
    pub fn view(&self) -> Result<FlowView<'_>, FlowError> {
        let state = self.cell.read();
        Ok(FlowView {
            states: StateSets {
                all: eval::all_states(&self.flow),
                available: eval::available_states(&self.flow, &state)?,
            },
            actions: ActionSets {
                all: eval::all_actions(&self.flow),
                available: eval::available_actions(&self.flow, &state)?,
            },
            flow: &self.flow,
            state,
        })
    }

    /// Send an action to the machine, returning the resulting active state.
    ///
    /// An action the current state does not accept is a no-op: the state is
    /// returned unchanged, nothing is written, logged, or observed. The only
    /// error is the current state being absent from the flow. There is
    /// deliberately no requirement that the current state accept *any*
    /// action: a state with an empty `on` mapping simply swallows everything
    /// sent to it.
    pub fn transition(&mut self, action: &str) -> Result<StateName, FlowError> {
        let current = self.cell.read();
        let next = eval::resolve(&self.flow, &current, action)?.map(str::to_string);

        let Some(next) = next else {
            return Ok(current);
        };
        if next == current {
            // Self-loop: nothing changed, so dependents are not re-notified.
            return Ok(current);
        }

        debug!(from = %current, to = %next, "state transition");
        self.cell.write(next.clone());
        self.log = self.log.record(TransitionRecord::now(current.clone(), next.clone()));
        if let Some(observer) = &self.observer {
            observer(&current, &next);
        }
        Ok(next)
    }
}
