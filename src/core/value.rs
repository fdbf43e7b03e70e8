//! Value traits for states and events.
//!
//! States and events are opaque to the engine: it never inspects them beyond
//! equality checks and set membership. Any value type with ordinary equality
//! semantics qualifies.

use std::fmt::Debug;

/// Trait for state values.
///
/// A state is a value drawn from the finite set of valid states declared in a
/// blueprint. The engine requires only comparison (for membership checks),
/// cloning (to capture the initial state into each instance), and `Debug`
/// (for error payloads and rendering).
///
/// Blanket-implemented: integers, strings, and plain enums all qualify
/// without any manual implementation.
///
/// # Example
///
/// ```rust
/// use lockstep::StateValue;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: StateValue>(_state: S) {}
///
/// assert_state(DoorState::Open);
/// assert_state(42);
/// assert_state("locked");
/// ```
pub trait StateValue: Clone + PartialEq + Debug + Send + Sync {}

impl<T> StateValue for T where T: Clone + PartialEq + Debug + Send + Sync {}

/// Trait for event values.
///
/// An event is a value drawn from the blueprint's alphabet. The requirements
/// mirror [`StateValue`]; states and events may even share a type.
pub trait EventValue: Clone + PartialEq + Debug + Send + Sync {}

impl<T> EventValue for T where T: Clone + PartialEq + Debug + Send + Sync {}
