//! Stateflow: a flow-table finite state machine evaluator.
//!
//! The core evaluates a static, name-keyed transition table (a "flow"): each
//! state names the actions it accepts and the state each action leads to.
//! The evaluation core is pure; the [`Machine`] shell binds it to a reactive
//! state cell so the active state can live wherever the host keeps its UI
//! state.
//!
//! # Core Concepts
//!
//! - **Flow**: the immutable transition table, insertion-ordered and
//!   JSON-serializable
//! - **Machine**: reads the current state from a [`StateCell`], resolves
//!   actions against the flow, and writes back only on actual change
//! - **Views**: point-in-time snapshots carrying the current state plus the
//!   `all`/`available` state and action sets, derived fresh each time
//!
//! Actions the current state does not accept are tolerated as silent no-ops;
//! the only failure mode is evaluating a state the flow does not define,
//! surfaced as [`FlowError::UnknownState`](crate::core::FlowError).
//!
//! # Example
//!
//! ```rust
//! use stateflow::{flow, Machine};
//!
//! let mut machine = Machine::new(
//!     "idle",
//!     flow! {
//!         "idle" => { "start" => "running" },
//!         "running" => { "pause" => "paused", "stop" => "idle" },
//!         "paused" => { "resume" => "running", "stop" => "idle" },
//!     },
//! );
//!
//! machine.transition("start").unwrap();
//!
//! let view = machine.view().unwrap();
//! assert_eq!(view.state, "running");
//! assert_eq!(view.actions.available, vec!["pause", "stop"]);
//! assert_eq!(view.states.available, vec!["paused", "idle"]);
//! assert_eq!(view.states.all, vec!["idle", "running", "paused"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use self::builder::{BuildError, FlowBuilder};
pub use self::core::{Flow, FlowError, OnMap, StateDef, TransitionLog, TransitionRecord};
pub use self::machine::{ActionSets, FlowView, LocalCell, Machine, Observer, StateCell, StateSets};
