//! Errors surfaced by the transition protocol.

use thiserror::Error;

/// Failure kinds returned by [`Machine::transition`](super::Machine::transition).
///
/// Every variant leaves the machine untouched: the committed state and
/// context are exactly what they were before the call.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The machine sits in a final state; only a reset can revive it.
    #[error("Machine is stopped: current state {state} is final")]
    Stopped { state: String },

    /// The supplied event is not a member of the alphabet.
    #[error("Invalid event {event}: not in the alphabet")]
    InvalidEvent { event: String },

    /// The transition function produced a candidate state outside the valid
    /// state set; the working context was discarded.
    #[error("Invalid state {state}: transition left the valid state set")]
    InvalidState { state: String },
}
