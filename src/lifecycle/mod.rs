//! Event-filtered lifecycle hooks run around transitions.
//!
//! A blueprint carries two ordered lists of [`LifecycleEntry`] values, one
//! dispatched immediately before the transition function and one immediately
//! after it. Each entry pairs a set of triggering events with an ordered list
//! of actions; during a transition attempt every entry whose event set
//! contains the current event runs, in registration order, with actions in
//! list order. Actions mutate the working context in place and return
//! nothing.

use crate::core::{Context, EventValue, StateValue};
use std::sync::Arc;

/// Side-effecting hook action.
///
/// Invoked with a state snapshot (the pre-transition state for the before
/// phase, the candidate state for the after phase), the working context, and
/// the triggering event. Return values are ignored; failures are not caught.
pub type HookAction<S, E, C> = Arc<dyn Fn(&S, &mut C, &E) + Send + Sync>;

/// Phase of the transition protocol a hook list is keyed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Dispatched before the transition function, with the current state.
    Before,
    /// Dispatched after a successful transition function call, with the
    /// candidate state.
    After,
}

/// One registry entry: a set of triggering events plus the ordered actions to
/// run when one of them drives a transition.
///
/// # Example
///
/// ```rust
/// use lockstep::{ContextMap, LifecycleEntry};
/// use serde_json::json;
///
/// let entry = LifecycleEntry::on([2, 3]).action(
///     |state: &i64, context: &mut ContextMap, event: &i64| {
///         context.insert(format!("before_{event}"), json!(state));
///     },
/// );
///
/// assert!(entry.matches(&2));
/// assert!(!entry.matches(&4));
/// ```
pub struct LifecycleEntry<S: StateValue, E: EventValue, C: Context> {
    events: Vec<E>,
    actions: Vec<HookAction<S, E, C>>,
}

impl<S: StateValue, E: EventValue, C: Context> LifecycleEntry<S, E, C> {
    /// Create an entry triggered by the given event set, with no actions yet.
    pub fn on<I: IntoIterator<Item = E>>(events: I) -> Self {
        Self {
            events: events.into_iter().collect(),
            actions: Vec::new(),
        }
    }

    /// Append an action. Actions run in the order they were appended.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&S, &mut C, &E) + Send + Sync + 'static,
    {
        self.actions.push(Arc::new(action));
        self
    }

    /// True if this entry's event set contains `event`.
    pub fn matches(&self, event: &E) -> bool {
        self.events.contains(event)
    }

    /// Run every action in list order.
    pub fn run(&self, state: &S, context: &mut C, event: &E) {
        for action in &self.actions {
            action(state, context, event);
        }
    }
}

impl<S: StateValue, E: EventValue, C: Context> Clone for LifecycleEntry<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            actions: self.actions.clone(),
        }
    }
}

/// Ordered lifecycle table consulted on every transition attempt.
///
/// # Example
///
/// ```rust
/// use lockstep::{LifecycleEntry, Lifecycles, Phase};
///
/// let lifecycles = Lifecycles::new()
///     .before(LifecycleEntry::on(['a']).action(
///         |_: &i64, log: &mut Vec<&str>, _: &char| log.push("before"),
///     ))
///     .after(LifecycleEntry::on(['a']).action(
///         |_: &i64, log: &mut Vec<&str>, _: &char| log.push("after"),
///     ));
///
/// let mut log = Vec::new();
/// lifecycles.dispatch(Phase::Before, &0, &mut log, &'a');
/// lifecycles.dispatch(Phase::After, &1, &mut log, &'a');
///
/// assert_eq!(log, ["before", "after"]);
/// ```
pub struct Lifecycles<S: StateValue, E: EventValue, C: Context> {
    before: Vec<LifecycleEntry<S, E, C>>,
    after: Vec<LifecycleEntry<S, E, C>>,
}

impl<S: StateValue, E: EventValue, C: Context> Lifecycles<S, E, C> {
    /// Create an empty table: no hooks in either phase.
    pub fn new() -> Self {
        Self {
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    /// Register an entry in the before phase.
    pub fn before(mut self, entry: LifecycleEntry<S, E, C>) -> Self {
        self.before.push(entry);
        self
    }

    /// Register an entry in the after phase.
    pub fn after(mut self, entry: LifecycleEntry<S, E, C>) -> Self {
        self.after.push(entry);
        self
    }

    /// Run every matching entry of `phase` for `event`, in registration
    /// order. All matching entries run, not just the first.
    pub fn dispatch(&self, phase: Phase, state: &S, context: &mut C, event: &E) {
        let entries = match phase {
            Phase::Before => &self.before,
            Phase::After => &self.after,
        };

        for entry in entries {
            if entry.matches(event) {
                entry.run(state, context, event);
            }
        }
    }
}

impl<S: StateValue, E: EventValue, C: Context> Clone for Lifecycles<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

impl<S: StateValue, E: EventValue, C: Context> Default for Lifecycles<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Vec<&'static str>;

    fn push(label: &'static str) -> impl Fn(&i64, &mut Log, &i64) + Send + Sync + 'static {
        move |_state, log, _event| log.push(label)
    }

    #[test]
    fn entry_matches_its_event_set() {
        let entry: LifecycleEntry<i64, i64, Log> = LifecycleEntry::on([1, 2]);

        assert!(entry.matches(&1));
        assert!(entry.matches(&2));
        assert!(!entry.matches(&3));
    }

    #[test]
    fn entry_runs_actions_in_order() {
        let entry = LifecycleEntry::on([1]).action(push("a")).action(push("b"));

        let mut log = Log::new();
        entry.run(&0, &mut log, &1);

        assert_eq!(log, ["a", "b"]);
    }

    #[test]
    fn dispatch_runs_entries_in_registration_order() {
        let lifecycles = Lifecycles::new()
            .before(LifecycleEntry::on([1]).action(push("a")).action(push("b")))
            .before(LifecycleEntry::on([1, 2]).action(push("c")));

        let mut log = Log::new();
        lifecycles.dispatch(Phase::Before, &0, &mut log, &1);

        assert_eq!(log, ["a", "b", "c"]);
    }

    #[test]
    fn dispatch_skips_non_matching_entries() {
        let lifecycles = Lifecycles::new()
            .before(LifecycleEntry::on([1]).action(push("a")))
            .before(LifecycleEntry::on([2]).action(push("b")));

        let mut log = Log::new();
        lifecycles.dispatch(Phase::Before, &0, &mut log, &2);

        assert_eq!(log, ["b"]);
    }

    #[test]
    fn phases_are_dispatched_separately() {
        let lifecycles = Lifecycles::new()
            .before(LifecycleEntry::on([1]).action(push("before")))
            .after(LifecycleEntry::on([1]).action(push("after")));

        let mut log = Log::new();
        lifecycles.dispatch(Phase::After, &0, &mut log, &1);

        assert_eq!(log, ["after"]);
    }

    #[test]
    fn hooks_observe_the_given_state_snapshot() {
        let lifecycles: Lifecycles<i64, i64, Vec<i64>> = Lifecycles::new().before(
            LifecycleEntry::on([1]).action(|state: &i64, seen: &mut Vec<i64>, _: &i64| {
                seen.push(*state)
            }),
        );

        let mut seen = Vec::new();
        lifecycles.dispatch(Phase::Before, &7, &mut seen, &1);

        assert_eq!(seen, [7]);
    }

    #[test]
    fn empty_table_dispatches_nothing() {
        let lifecycles: Lifecycles<i64, i64, Log> = Lifecycles::default();

        let mut log = Log::new();
        lifecycles.dispatch(Phase::Before, &0, &mut log, &1);
        lifecycles.dispatch(Phase::After, &0, &mut log, &1);

        assert!(log.is_empty());
    }
}
