//! Lockstep: a deterministic finite state machine engine
//!
//! Lockstep drives single-step transitions of caller-defined automata. A
//! [`Blueprint`] describes the automaton once (states, alphabet, transition
//! function, lifecycle hooks, initial context) and is validated at
//! construction; any number of [`Machine`] instances can then be created from
//! it and stepped independently.
//!
//! # Core Concepts
//!
//! - **State** and **Event**: opaque, comparable values supplied by the
//!   caller; the engine only requires equality and set membership
//! - **Context**: mutable side-data carried across transitions, the only
//!   channel between the transition function and lifecycle hooks
//! - **Lifecycles**: ordered, event-filtered actions run immediately before
//!   or after the transition function
//!
//! Every transition attempt is atomic: hooks and the transition function
//! operate on a working copy of the context, and a rejected candidate state
//! leaves the machine exactly as it was.
//!
//! # Example
//!
//! A recognizer for binary multiples of three, fed most significant bit
//! first:
//!
//! ```rust
//! use lockstep::{BlueprintBuilder, ContextMap, LifecycleEntry, Machine};
//! use serde_json::json;
//!
//! let blueprint = BlueprintBuilder::new()
//!     .valid_states([0, 1, 2])
//!     .alphabet([0, 1])
//!     .initial_state(0)
//!     .accepted_states([0])
//!     .initial_context(ContextMap::from_iter([("value".to_string(), json!(0))]))
//!     .transition(|context: &mut ContextMap, event: &i64| {
//!         let value = (context["value"].as_i64().unwrap() << 1) | event;
//!         context.insert("value".to_string(), json!(value));
//!         value % 3
//!     })
//!     .before(LifecycleEntry::on([0, 1]).action(
//!         |state: &i64, context: &mut ContextMap, _event: &i64| {
//!             context.insert("from".to_string(), json!(state));
//!         },
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(blueprint);
//! for bit in [1, 1, 0] {
//!     machine.transition(bit).unwrap();
//! }
//!
//! assert_eq!(machine.state(), &0);
//! assert!(machine.accepted());
//! assert_eq!(machine.context()["value"], json!(6));
//! ```

pub mod blueprint;
pub mod core;
pub mod lifecycle;
pub mod machine;

// Re-export commonly used types
pub use blueprint::{Blueprint, BlueprintBuilder, BlueprintError, TransitionFn};
pub use core::{Context, ContextMap, EventValue, StateValue};
pub use lifecycle::{HookAction, LifecycleEntry, Lifecycles, Phase};
pub use machine::{Machine, TransitionError};
