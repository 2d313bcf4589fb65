//! The reactive state-cell seam.
//!
//! The machine never stores the active state itself; it reads and writes a
//! cell supplied by the host. In a UI embedding the cell wraps the
//! framework's own reactive primitive (signal, store, hook state) so that a
//! write fans out to dependents under the framework's batching rules. For
//! plain embedding and for tests, [`LocalCell`] is a sufficient
//! implementation.

use std::cell::RefCell;

use crate::core::StateName;

/// One mutable cell holding the active state name.
///
/// Implementations must guarantee that a `read` after a `write` observes the
/// written value. Notifying dependents of a write is the implementation's
/// concern; the machine only requires the read/write contract.
pub trait StateCell {
    /// The currently active state name.
    fn read(&self) -> StateName;

    /// Replace the active state name.
    fn write(&self, next: StateName);
}

/// In-memory [`StateCell`] with no notification fan-out.
#[derive(Debug)]
pub struct LocalCell {
    value: RefCell<StateName>,
}

impl LocalCell {
    pub fn new(initial: impl Into<StateName>) -> Self {
        Self {
            value: RefCell::new(initial.into()),
        }
    }
}

impl StateCell for LocalCell {
    fn read(&self) -> StateName {
        self.value.borrow().clone()
    }

    fn write(&self, next: StateName) {
        *self.value.borrow_mut() = next;
    }
}
