//! Core flow-evaluation types and logic.
//!
//! This module contains the pure functional core of the evaluator:
//! - Flow tables (`Flow`, `StateDef`, `OnMap`)
//! - Derivation functions over a table (`eval`)
//! - Immutable transition logging
//!
//! All logic in this module is pure (no side effects); the imperative shell
//! lives in [`crate::machine`].

mod error;
pub mod eval;
mod flow;
mod history;

pub use error::FlowError;
pub use flow::{ActionName, Flow, OnMap, StateDef, StateName};
pub use history::{TransitionLog, TransitionRecord};
