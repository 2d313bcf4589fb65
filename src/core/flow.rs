//! The flow table: a name-keyed description of states and their transitions.
//!
//! A flow maps each state name to the signals it accepts and the state each
//! signal leads to. Tables are plain data: string-keyed, insertion-ordered,
//! and serializable to and from the natural JSON shape
//! `{"idle": {"on": {"start": "running"}}}`.
//!
//! Entries keep first-insertion order through mutation and serde round trips,
//! so every derived view of a flow is deterministic for a given document.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Name of a state. Opaque to the evaluator; unique as a flow key.
pub type StateName = String;

/// Name of a signal/action that can be sent to the machine.
pub type ActionName = String;

/// Insertion-ordered mapping from action name to the state it leads to.
///
/// Inserting an action that is already present replaces its target but keeps
/// the action's original position, matching JSON-object update semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnMap {
    entries: Vec<(ActionName, StateName)>,
}

impl OnMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the target for an action.
    pub fn insert(&mut self, action: impl Into<ActionName>, target: impl Into<StateName>) {
        let action = action.into();
        let target = target.into();
        match self.entries.iter_mut().find(|(a, _)| *a == action) {
            Some((_, t)) => *t = target,
            None => self.entries.push((action, target)),
        }
    }

    /// The state reached by firing `action`, if the action is accepted.
    pub fn target(&self, action: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, t)| t.as_str())
    }

    /// Whether `action` is accepted.
    pub fn contains(&self, action: &str) -> bool {
        self.entries.iter().any(|(a, _)| a == action)
    }

    /// Action names in insertion order.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(a, _)| a.as_str())
    }

    /// Target state names in insertion order (may repeat).
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, t)| t.as_str())
    }

    /// `(action, target)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for OnMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (action, target) in &self.entries {
            map.serialize_entry(action, target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OnMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OnMapVisitor;

        impl<'de> Visitor<'de> for OnMapVisitor {
            type Value = OnMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of action names to state names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut on = OnMap::new();
                while let Some((action, target)) = access.next_entry::<String, String>()? {
                    on.insert(action, target);
                }
                Ok(on)
            }
        }

        deserializer.deserialize_map(OnMapVisitor)
    }
}

/// Definition of a single state: the signals it accepts via its `on` mapping.
///
/// A state with an empty `on` mapping is valid; it accepts nothing and every
/// action sent while it is active is a no-op.
///
/// # Example
///
/// ```rust
/// use stateflow::core::StateDef;
///
/// let def = StateDef::new().with("go", "running").with("quit", "done");
/// assert_eq!(def.on().target("go"), Some("running"));
/// assert!(def.on().target("jump").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    on: OnMap,
}

impl StateDef {
    /// Create a definition that accepts no actions.
    pub fn new() -> Self {
        Self { on: OnMap::new() }
    }

    /// Add an accepted action, chaining.
    pub fn with(mut self, action: impl Into<ActionName>, target: impl Into<StateName>) -> Self {
        self.on.insert(action, target);
        self
    }

    /// Add or replace an accepted action.
    pub fn add(&mut self, action: impl Into<ActionName>, target: impl Into<StateName>) {
        self.on.insert(action, target);
    }

    /// The `on` mapping of accepted actions.
    pub fn on(&self) -> &OnMap {
        &self.on
    }
}

/// The transition table: an insertion-ordered mapping from state name to
/// [`StateDef`].
///
/// A flow is immutable for the lifetime of any machine evaluating it; all
/// mutation happens during construction (builder, macro, or deserialization).
///
/// # Example
///
/// ```rust
/// use stateflow::core::{Flow, StateDef};
///
/// let mut flow = Flow::new();
/// flow.insert("idle", StateDef::new().with("start", "running"));
/// flow.insert("running", StateDef::new().with("stop", "idle"));
///
/// assert!(flow.contains("idle"));
/// assert_eq!(flow.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flow {
    states: Vec<(StateName, StateDef)>,
}

impl Flow {
    /// Create an empty flow.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Insert or replace a state definition. Replacing keeps the state's
    /// original position in table order.
    pub fn insert(&mut self, name: impl Into<StateName>, def: StateDef) {
        let name = name.into();
        match self.states.iter_mut().find(|(n, _)| *n == name) {
            Some((_, d)) => *d = def,
            None => self.states.push((name, def)),
        }
    }

    /// Insert a state definition, chaining.
    pub fn with_state(mut self, name: impl Into<StateName>, def: StateDef) -> Self {
        self.insert(name, def);
        self
    }

    /// Look up a state's definition.
    pub fn get(&self, state: &str) -> Option<&StateDef> {
        self.states
            .iter()
            .find(|(n, _)| n == state)
            .map(|(_, d)| d)
    }

    /// Whether `state` is a key of the flow.
    pub fn contains(&self, state: &str) -> bool {
        self.states.iter().any(|(n, _)| n == state)
    }

    /// `(name, definition)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.states.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// State names in table order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Serialize for Flow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.states.len()))?;
        for (name, def) in &self.states {
            map.serialize_entry(name, def)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Flow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlowVisitor;

        impl<'de> Visitor<'de> for FlowVisitor {
            type Value = Flow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of state names to state definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut flow = Flow::new();
                while let Some((name, def)) = access.next_entry::<String, StateDef>()? {
                    flow.insert(name, def);
                }
                Ok(flow)
            }
        }

        deserializer.deserialize_map(FlowVisitor)
    }
}
