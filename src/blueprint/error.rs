//! Construction errors for automaton blueprints.

use thiserror::Error;

/// Errors that can occur when building a [`Blueprint`](super::Blueprint).
///
/// Construction either fails completely or yields a fully validated
/// blueprint; no partial value is ever produced.
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("Initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,

    #[error("Transition function not specified. Call .transition(function) before .build()")]
    MissingTransition,

    #[error("Invalid initial state {state}: not a member of the valid states")]
    InvalidInitialState { state: String },
}
