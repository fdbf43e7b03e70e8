//! Builder for constructing automaton blueprints.

use crate::blueprint::error::BlueprintError;
use crate::blueprint::{Blueprint, TransitionFn};
use crate::core::{Context, EventValue, StateValue};
use crate::lifecycle::{LifecycleEntry, Lifecycles};
use std::sync::Arc;

/// Fluent builder for [`Blueprint`]s.
///
/// Exactly one semantic precondition is checked eagerly: the initial state
/// must be a member of the valid state set. Everything else is deliberately
/// permissive: accepted and final states need not be valid states, and the
/// alphabet may be empty. Omitted fields fall back to their defaults, an
/// empty context and an empty lifecycle table.
///
/// # Example
///
/// ```rust
/// use lockstep::{BlueprintBuilder, ContextMap};
///
/// let blueprint = BlueprintBuilder::<&str, char, ContextMap>::new()
///     .valid_states(["green", "yellow", "red"])
///     .alphabet(['n'])
///     .initial_state("green")
///     .transition(|_context, _event| "yellow")
///     .build()
///     .unwrap();
///
/// assert!(blueprint.is_valid(&"green"));
/// assert!(blueprint.is_initial(&"green"));
/// ```
pub struct BlueprintBuilder<S: StateValue, E: EventValue, C: Context> {
    valid_states: Vec<S>,
    alphabet: Vec<E>,
    initial_state: Option<S>,
    accepted_states: Vec<S>,
    final_states: Vec<S>,
    initial_context: Option<C>,
    transition: Option<TransitionFn<S, E, C>>,
    lifecycles: Lifecycles<S, E, C>,
}

impl<S: StateValue, E: EventValue, C: Context> BlueprintBuilder<S, E, C> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            valid_states: Vec::new(),
            alphabet: Vec::new(),
            initial_state: None,
            accepted_states: Vec::new(),
            final_states: Vec::new(),
            initial_context: None,
            transition: None,
            lifecycles: Lifecycles::new(),
        }
    }

    /// Declare the set of states the machine may occupy.
    pub fn valid_states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.valid_states = states.into_iter().collect();
        self
    }

    /// Declare the event alphabet.
    pub fn alphabet<I: IntoIterator<Item = E>>(mut self, events: I) -> Self {
        self.alphabet = events.into_iter().collect();
        self
    }

    /// Set the initial state (required; must be a valid state).
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Declare the accepted state set.
    pub fn accepted_states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.accepted_states = states.into_iter().collect();
        self
    }

    /// Declare the final state set.
    pub fn final_states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.final_states = states.into_iter().collect();
        self
    }

    /// Set the context instances start with. Defaults to `C::default()`.
    pub fn initial_context(mut self, context: C) -> Self {
        self.initial_context = Some(context);
        self
    }

    /// Set the transition function (required).
    pub fn transition<F>(mut self, function: F) -> Self
    where
        F: Fn(&mut C, &E) -> S + Send + Sync + 'static,
    {
        self.transition = Some(Arc::new(function));
        self
    }

    /// Replace the whole lifecycle table.
    pub fn lifecycles(mut self, lifecycles: Lifecycles<S, E, C>) -> Self {
        self.lifecycles = lifecycles;
        self
    }

    /// Register a before-phase lifecycle entry.
    pub fn before(mut self, entry: LifecycleEntry<S, E, C>) -> Self {
        self.lifecycles = self.lifecycles.before(entry);
        self
    }

    /// Register an after-phase lifecycle entry.
    pub fn after(mut self, entry: LifecycleEntry<S, E, C>) -> Self {
        self.lifecycles = self.lifecycles.after(entry);
        self
    }

    /// Build the blueprint.
    ///
    /// Fails if a required field is missing or the initial state is not a
    /// member of the valid state set.
    pub fn build(self) -> Result<Blueprint<S, E, C>, BlueprintError> {
        let initial_state = self.initial_state.ok_or(BlueprintError::MissingInitialState)?;
        let transition = self.transition.ok_or(BlueprintError::MissingTransition)?;

        if !self.valid_states.contains(&initial_state) {
            return Err(BlueprintError::InvalidInitialState {
                state: format!("{initial_state:?}"),
            });
        }

        Ok(Blueprint {
            valid_states: self.valid_states,
            alphabet: self.alphabet,
            initial_state,
            accepted_states: self.accepted_states,
            final_states: self.final_states,
            initial_context: self.initial_context.unwrap_or_default(),
            transition,
            lifecycles: self.lifecycles,
        })
    }
}

impl<S: StateValue, E: EventValue, C: Context> Default for BlueprintBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
