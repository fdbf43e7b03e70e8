//! The stateful transition engine.
//!
//! A [`Machine`] is a live automaton instance created from a
//! [`Blueprint`](crate::blueprint::Blueprint). It owns its current state and
//! context exclusively and advances one event at a time through an atomic
//! transition protocol: hooks and the transition function only ever touch a
//! working copy of the context, so a rejected attempt leaves the instance
//! exactly as it was.

mod error;

pub use error::TransitionError;

use crate::blueprint::Blueprint;
use crate::core::{Context, EventValue, StateValue};
use crate::lifecycle::Phase;
use std::fmt;
use std::sync::Arc;

/// A live automaton instance.
///
/// Renders as `"<state> (<OK|NO>)"` via [`Display`](fmt::Display), where `OK`
/// marks an accepted state.
///
/// # Example
///
/// ```rust
/// use lockstep::{BlueprintBuilder, ContextMap, Machine, TransitionError};
///
/// let blueprint = BlueprintBuilder::<i64, i64, ContextMap>::new()
///     .valid_states([1, 2, 3, 4])
///     .alphabet([1, 2, 3, 4])
///     .initial_state(1)
///     .accepted_states([3])
///     .final_states([4])
///     .transition(|_context, event| *event)
///     .build()
///     .unwrap();
///
/// let mut machine = Machine::new(blueprint);
///
/// machine.transition(3).unwrap();
/// assert!(machine.accepted());
///
/// machine.transition(4).unwrap();
/// assert!(machine.halted());
/// assert!(matches!(
///     machine.transition(1),
///     Err(TransitionError::Stopped { .. })
/// ));
///
/// machine.reset();
/// assert_eq!(machine.state(), &1);
/// ```
pub struct Machine<S: StateValue, E: EventValue, C: Context> {
    blueprint: Blueprint<S, E, C>,
    state: S,
    context: C,
    accepted: bool,
}

impl<S: StateValue, E: EventValue, C: Context> Machine<S, E, C> {
    /// Create an instance positioned at the blueprint's initial state, with a
    /// fresh copy of its initial context.
    pub fn new(blueprint: Blueprint<S, E, C>) -> Self {
        let state = blueprint.initial_state().clone();
        let context = blueprint.initial_context().clone();
        let accepted = blueprint.is_accepted(&state);

        Self {
            blueprint,
            state,
            context,
            accepted,
        }
    }

    /// The current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The current context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Cached acceptance flag, equal to
    /// `self.blueprint().is_accepted(self.state())` after every committed
    /// transition and after every reset.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// True once the current state is final; every transition attempt fails
    /// with [`TransitionError::Stopped`] until [`reset`](Self::reset).
    pub fn halted(&self) -> bool {
        self.blueprint.is_final(&self.state)
    }

    /// The blueprint this instance was created from.
    pub fn blueprint(&self) -> &Blueprint<S, E, C> {
        &self.blueprint
    }

    /// Attempt one atomic transition driven by `event`.
    ///
    /// The protocol, in order: reject if halted in a final state; reject
    /// events outside the alphabet; run matching before-hooks on a working
    /// copy of the context; invoke the transition function; reject candidate
    /// states outside the valid set, discarding the working copy; run
    /// matching after-hooks; commit state, context, and the acceptance flag.
    ///
    /// On success, returns the committed state. On failure, the machine is
    /// left byte-for-byte unchanged, hook mutations included.
    pub fn transition(&mut self, event: E) -> Result<&S, TransitionError> {
        if self.blueprint.is_final(&self.state) {
            return Err(TransitionError::Stopped {
                state: format!("{:?}", self.state),
            });
        }

        if !self.blueprint.in_alphabet(&event) {
            return Err(TransitionError::InvalidEvent {
                event: format!("{event:?}"),
            });
        }

        // Hooks and the transition function only ever see this working copy;
        // the committed context stays untouched until the step is known good.
        let mut working = self.context.clone();

        self.blueprint
            .lifecycles()
            .dispatch(Phase::Before, &self.state, &mut working, &event);

        let function = Arc::clone(self.blueprint.transition());
        let candidate = function(&mut working, &event);

        if !self.blueprint.is_valid(&candidate) {
            return Err(TransitionError::InvalidState {
                state: format!("{candidate:?}"),
            });
        }

        self.blueprint
            .lifecycles()
            .dispatch(Phase::After, &candidate, &mut working, &event);

        self.accepted = self.blueprint.is_accepted(&candidate);
        self.state = candidate;
        self.context = working;

        Ok(&self.state)
    }

    /// Restore the initial state and a fresh copy of the initial context.
    ///
    /// Always succeeds, including from a final state.
    pub fn reset(&mut self) {
        self.state = self.blueprint.initial_state().clone();
        self.context = self.blueprint.initial_context().clone();
        self.accepted = self.blueprint.is_accepted(&self.state);
    }
}

impl<S: StateValue, E: EventValue, C: Context> fmt::Display for Machine<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accepted = if self.accepted { "OK" } else { "NO" };
        write!(f, "{:?} ({accepted})", self.state)
    }
}
