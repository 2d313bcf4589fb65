//! Property-based tests for the flow evaluation core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated flow tables.

use proptest::prelude::*;
use stateflow::core::{eval, Flow, TransitionLog, TransitionRecord};
use stateflow::Machine;

fn state_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["alpha", "beta", "gamma", "delta"]).prop_map(String::from)
}

fn action_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["go", "stop", "jump", "reset"]).prop_map(String::from)
}

prop_compose! {
    fn arbitrary_flow()(
        entries in prop::collection::vec(
            (
                state_name(),
                prop::collection::vec((action_name(), state_name()), 0..4),
            ),
            1..5,
        )
    ) -> Flow {
        let mut flow = Flow::new();
        for (state, on) in entries {
            let mut def = flow.get(&state).cloned().unwrap_or_default();
            for (action, target) in on {
                def.add(action, target);
            }
            flow.insert(state, def);
        }
        flow
    }
}

/// Pick one of the flow's defined states.
fn state_in(flow: &Flow, idx: usize) -> String {
    let states = eval::all_states(flow);
    states[idx % states.len()].clone()
}

proptest! {
    #[test]
    fn transition_is_deterministic(
        flow in arbitrary_flow(),
        idx in 0usize..16,
        action in action_name(),
    ) {
        let state = state_in(&flow, idx);
        let mut first = Machine::new(state.clone(), flow.clone());
        let mut second = Machine::new(state, flow);

        prop_assert_eq!(
            first.transition(&action).unwrap(),
            second.transition(&action).unwrap()
        );
        prop_assert_eq!(first.state(), second.state());
    }

    #[test]
    fn unaccepted_action_leaves_state_unchanged(
        flow in arbitrary_flow(),
        idx in 0usize..16,
        action in action_name(),
    ) {
        let state = state_in(&flow, idx);
        let accepted = eval::available_actions(&flow, &state).unwrap();
        prop_assume!(!accepted.contains(&action));

        let mut machine = Machine::new(state.clone(), flow);
        prop_assert_eq!(machine.transition(&action).unwrap(), state.clone());
        prop_assert_eq!(machine.state(), state);
        prop_assert!(machine.log().records().is_empty());
    }

    #[test]
    fn transition_result_matches_table_entry(
        flow in arbitrary_flow(),
        idx in 0usize..16,
        action in action_name(),
    ) {
        let state = state_in(&flow, idx);
        let expected = match eval::resolve(&flow, &state, &action).unwrap() {
            Some(target) if target != state => target.to_string(),
            _ => state.clone(),
        };

        let mut machine = Machine::new(state, flow);
        prop_assert_eq!(machine.transition(&action).unwrap(), expected);
    }

    #[test]
    fn derived_sets_contain_no_duplicates(flow in arbitrary_flow(), idx in 0usize..16) {
        let state = state_in(&flow, idx);

        for set in [
            eval::available_actions(&flow, &state).unwrap(),
            eval::available_states(&flow, &state).unwrap(),
            eval::all_states(&flow),
            eval::all_actions(&flow),
        ] {
            let mut unique = set.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), set.len());
        }
    }

    #[test]
    fn derivation_is_idempotent(flow in arbitrary_flow(), idx in 0usize..16) {
        let state = state_in(&flow, idx);

        prop_assert_eq!(
            eval::available_actions(&flow, &state).unwrap(),
            eval::available_actions(&flow, &state).unwrap()
        );
        prop_assert_eq!(
            eval::available_states(&flow, &state).unwrap(),
            eval::available_states(&flow, &state).unwrap()
        );
        prop_assert_eq!(eval::all_states(&flow), eval::all_states(&flow));
        prop_assert_eq!(eval::all_actions(&flow), eval::all_actions(&flow));
    }

    #[test]
    fn available_actions_are_a_subset_of_all_actions(
        flow in arbitrary_flow(),
        idx in 0usize..16,
    ) {
        let state = state_in(&flow, idx);
        let all = eval::all_actions(&flow);

        for action in eval::available_actions(&flow, &state).unwrap() {
            prop_assert!(all.contains(&action));
        }
    }

    #[test]
    fn flow_roundtrip_serialization(flow in arbitrary_flow()) {
        let json = serde_json::to_string(&flow).unwrap();
        let parsed: Flow = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(flow, parsed);
    }

    #[test]
    fn log_path_threads_through_records(
        hops in prop::collection::vec((state_name(), state_name()), 1..8),
    ) {
        let mut log = TransitionLog::new();
        for (from, to) in &hops {
            log = log.record(TransitionRecord::now(from.clone(), to.clone()));
        }

        let path = log.path();
        prop_assert_eq!(path.len(), hops.len() + 1);
        prop_assert_eq!(path[0], hops[0].0.as_str());
        for (i, (_, to)) in hops.iter().enumerate() {
            prop_assert_eq!(path[i + 1], to.as_str());
        }
    }
}
