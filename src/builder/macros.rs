//! Macros for ergonomic flow construction.

/// Build a [`Flow`](crate::core::Flow) from a table literal.
///
/// Mirrors the natural written shape of a flow: each state maps to the
/// actions it accepts and the state each action leads to. States and actions
/// keep the order they appear in.
///
/// # Example
///
/// ```
/// use stateflow::flow;
///
/// let flow = flow! {
///     "idle" => { "start" => "running" },
///     "running" => { "pause" => "paused", "stop" => "idle" },
///     "paused" => { "resume" => "running" },
///     "done" => {},
/// };
///
/// assert_eq!(flow.len(), 4);
/// assert_eq!(flow.get("running").unwrap().on().target("stop"), Some("idle"));
/// ```
#[macro_export]
macro_rules! flow {
    (
        $( $state:expr => { $( $action:expr => $target:expr ),* $(,)? } ),* $(,)?
    ) => {
        $crate::core::Flow::new()
            $(
                .with_state(
                    $state,
                    $crate::core::StateDef::new() $( .with($action, $target) )*,
                )
            )*
    };
}
