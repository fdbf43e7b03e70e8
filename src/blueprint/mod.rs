//! Immutable automaton descriptions.
//!
//! A [`Blueprint`] captures everything that defines an automaton: the valid
//! state set, the event alphabet, the initial state and context, the
//! accepted and final state sets, the transition function, and the lifecycle
//! table. It is built once via [`BlueprintBuilder`], validated at
//! construction, and never mutated afterwards; cloning it is cheap (closure
//! tables are reference-counted) and is how one description fans out to many
//! independent [`Machine`](crate::machine::Machine) instances.

mod builder;
mod error;

pub use builder::BlueprintBuilder;
pub use error::BlueprintError;

use crate::core::{Context, EventValue, StateValue};
use crate::lifecycle::Lifecycles;
use std::sync::Arc;

/// Caller-supplied transition function.
///
/// Given the working context and the triggering event, returns the candidate
/// next state. Pure with respect to state, but free to mutate the context it
/// is handed; the engine validates the candidate before committing either.
pub type TransitionFn<S, E, C> = Arc<dyn Fn(&mut C, &E) -> S + Send + Sync>;

/// Immutable description of a deterministic finite automaton.
pub struct Blueprint<S: StateValue, E: EventValue, C: Context> {
    valid_states: Vec<S>,
    alphabet: Vec<E>,
    initial_state: S,
    accepted_states: Vec<S>,
    final_states: Vec<S>,
    initial_context: C,
    transition: TransitionFn<S, E, C>,
    lifecycles: Lifecycles<S, E, C>,
}

impl<S: StateValue, E: EventValue, C: Context> Blueprint<S, E, C> {
    /// All states the machine may ever occupy.
    pub fn valid_states(&self) -> &[S] {
        &self.valid_states
    }

    /// All events the machine accepts.
    pub fn alphabet(&self) -> &[E] {
        &self.alphabet
    }

    /// The state every fresh or reset instance starts in.
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    /// The context every fresh or reset instance starts with.
    pub fn initial_context(&self) -> &C {
        &self.initial_context
    }

    /// The transition function.
    pub fn transition(&self) -> &TransitionFn<S, E, C> {
        &self.transition
    }

    /// The lifecycle table.
    pub fn lifecycles(&self) -> &Lifecycles<S, E, C> {
        &self.lifecycles
    }

    /// True if `state` is a member of the valid state set.
    pub fn is_valid(&self, state: &S) -> bool {
        self.valid_states.contains(state)
    }

    /// True if `state` is the initial state.
    pub fn is_initial(&self, state: &S) -> bool {
        *state == self.initial_state
    }

    /// True if `state` is a member of the accepted state set.
    ///
    /// Acceptance is purely informational; it never affects transition
    /// legality.
    pub fn is_accepted(&self, state: &S) -> bool {
        self.accepted_states.contains(state)
    }

    /// True if `state` is a member of the final state set.
    ///
    /// A machine sitting in a final state rejects every transition until
    /// reset.
    pub fn is_final(&self, state: &S) -> bool {
        self.final_states.contains(state)
    }

    /// True if `event` is a member of the alphabet.
    pub fn in_alphabet(&self, event: &E) -> bool {
        self.alphabet.contains(event)
    }
}

impl<S: StateValue, E: EventValue, C: Context> Clone for Blueprint<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            valid_states: self.valid_states.clone(),
            alphabet: self.alphabet.clone(),
            initial_state: self.initial_state.clone(),
            accepted_states: self.accepted_states.clone(),
            final_states: self.final_states.clone(),
            initial_context: self.initial_context.clone(),
            transition: Arc::clone(&self.transition),
            lifecycles: self.lifecycles.clone(),
        }
    }
}
